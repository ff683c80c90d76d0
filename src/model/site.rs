//! Construction-site records collected by the host's syntax traversal.

use std::collections::HashSet;

use crate::diagnostics::SourceLocation;
use crate::model::TypeHandle;

/// A single object-construction expression, ready for verification.
///
/// The host resolves the constructed type reference to a [`TypeHandle`] and
/// enumerates the initializer list's assignment sub-expressions. Only
/// assignments whose left-hand target is a simple field reference contribute
/// a name; non-simple targets such as indexers contribute nothing and are
/// ignored. `assigned_fields` may be empty, e.g. when no initializer syntax
/// is present at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionSite {
    /// Resolved identity of the constructed type
    pub type_handle: TypeHandle,
    /// Enclosing namespace/module path; the empty string when the host
    /// cannot determine one (e.g. top-level scope)
    pub scope_path: String,
    /// Field names explicitly assigned in the initializer list
    pub assigned_fields: HashSet<String>,
    /// Span of the constructed type's name token
    pub location: SourceLocation,
}

impl ConstructionSite {
    /// Creates a site record.
    #[must_use]
    pub fn new(
        type_handle: TypeHandle,
        scope_path: impl Into<String>,
        assigned_fields: HashSet<String>,
        location: SourceLocation,
    ) -> Self {
        ConstructionSite {
            type_handle,
            scope_path: scope_path.into(),
            assigned_fields,
            location,
        }
    }

    /// Convenience constructor collecting assigned field names from any
    /// iterator of string-likes.
    pub fn with_assignments<I, S>(
        type_handle: TypeHandle,
        scope_path: impl Into<String>,
        assigned: I,
        location: SourceLocation,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConstructionSite::new(
            type_handle,
            scope_path,
            assigned.into_iter().map(Into::into).collect(),
            location,
        )
    }
}
