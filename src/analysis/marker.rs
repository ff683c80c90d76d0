//! Marker-attribute resolution and session configuration.
//!
//! A session only checks anything if the compilation declares (or
//! references) the marker attribute type; resolving it is the first thing a
//! session does, and failing to find it turns the whole pass into a no-op.
//! The suppression-list attribute is optional on top of that.

use crate::analysis::SuppressionScope;
use crate::model::{AttributeValue, SymbolModel, TypeHandle};

/// Named argument on a suppression declaration carrying the scope path.
const SCOPE_ARG: &str = "Scope";

/// Fully-qualified names of the attribute types a session honors.
///
/// The attributes themselves are declared by the project under analysis
/// (or a shared annotations package); the checker only needs their names to
/// find the identities in the compilation's symbol space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerNames {
    /// The opt-in marker attribute placed on types
    pub marker_type: String,
    /// The compilation-scoped suppression-list attribute
    pub suppression_type: String,
}

impl Default for MarkerNames {
    fn default() -> Self {
        MarkerNames {
            marker_type: "Annotations.RequiredFieldsAttribute".to_string(),
            suppression_type: "Annotations.SuppressRequiredFieldsCheckAttribute".to_string(),
        }
    }
}

impl MarkerNames {
    /// Creates a configuration with custom attribute names.
    pub fn new(marker_type: impl Into<String>, suppression_type: impl Into<String>) -> Self {
        MarkerNames {
            marker_type: marker_type.into(),
            suppression_type: suppression_type.into(),
        }
    }
}

/// The resolved marker identity plus the session's suppression list.
///
/// Built once during single-threaded session setup; immutable and freely
/// shared across threads afterwards.
#[derive(Debug, Clone)]
pub struct MarkerContext {
    marker: TypeHandle,
    suppressions: SuppressionScope,
}

impl MarkerContext {
    /// Resolves the marker attribute in the compilation's symbol space.
    ///
    /// Returns `None` when the marker attribute type is absent, which
    /// disables checking for the whole session - callers skip registering
    /// any per-site work.
    ///
    /// When the suppression attribute type is also present, every
    /// assembly-level declaration of it contributes its `Scope` string
    /// argument to the session's suppression list. A declaration missing
    /// that argument, or carrying a non-string value, is a configuration
    /// error: that single entry is dropped and the rest still apply.
    #[must_use]
    pub fn resolve(model: &dyn SymbolModel, names: &MarkerNames) -> Option<Self> {
        let marker = model.type_by_name(&names.marker_type)?;

        let mut scopes = Vec::new();
        if let Some(suppression_type) = model.type_by_name(&names.suppression_type) {
            if let Ok(declarations) = model.assembly_attributes(suppression_type) {
                for declaration in declarations {
                    let Some(path) = declaration
                        .named_arg(SCOPE_ARG)
                        .and_then(AttributeValue::as_str)
                    else {
                        continue;
                    };
                    scopes.push(path.to_string());
                }
            }
        }

        Some(MarkerContext {
            marker,
            suppressions: SuppressionScope::new(scopes),
        })
    }

    /// Identity of the marker attribute type.
    #[must_use]
    pub fn marker(&self) -> TypeHandle {
        self.marker
    }

    /// The suppression list in effect for this session.
    #[must_use]
    pub fn suppressions(&self) -> &SuppressionScope {
        &self.suppressions
    }
}
