//! Requirement resolution for marked types.
//!
//! Given a type's attribute list and member enumeration, this module
//! computes the definitive set of field names every construction site of
//! that type must assign. Resolution runs at most once per type per
//! session; the [`SessionCache`] turns every later lookup into a pure read.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::{MarkerContext, SessionCache};
use crate::model::{AttributeInstance, AttributeValue, SymbolModel, TypeHandle};
use crate::Result;

/// Named argument carrying the explicit allow-list.
const REQUIRED_ARG: &str = "Required";
/// Named argument carrying the exclusion list.
const OPTIONAL_ARG: &str = "Optional";

/// Parsed form of the marker attribute's arguments.
///
/// Each list is honored only when the argument is present, non-null and of
/// array kind; anything else leaves the corresponding slot `None` as if the
/// argument had not been written. Non-string elements inside an otherwise
/// well-formed array are skipped individually. Malformed configuration
/// degrades, it never fails the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSpec {
    /// Explicit allow-list: exactly these fields are required
    pub required: Option<Vec<String>>,
    /// Explicit exclusions, subtracted from whichever mode applies
    pub optional: Option<Vec<String>>,
}

impl RequirementSpec {
    /// Parses a marker attribute instance's override lists.
    #[must_use]
    pub fn from_attribute(attribute: &AttributeInstance) -> Self {
        RequirementSpec {
            required: string_array(attribute.named_arg(REQUIRED_ARG)),
            optional: string_array(attribute.named_arg(OPTIONAL_ARG)),
        }
    }
}

/// String elements of an array-kind argument; `None` for absent, null or
/// non-array values.
fn string_array(value: Option<&AttributeValue>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_str().map(ToString::to_string))
            .collect(),
    )
}

/// The resolved required-field set of one marked type.
///
/// Names keep a deterministic, deduplicated order - the type's field
/// declaration order in automatic mode, the attribute's list order in
/// explicit mode, first occurrence winning. Diagnostics are emitted in this
/// order. An empty set is legitimate and means "marked, nothing to verify".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    /// Creates a set from already-ordered names, dropping duplicates while
    /// keeping the first occurrence.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let mut fields = names;
        fields.retain(|name| seen.insert(name.clone()));
        RequiredFields { fields }
    }

    /// The field names in canonical order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.fields
    }

    /// Number of required fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Membership test by field name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }
}

/// Computes each marked type's required-field set, backed by the session
/// cache.
pub struct RequirementResolver;

impl RequirementResolver {
    /// Resolves `ty`'s required fields, consulting `cache` first.
    ///
    /// `None` means the type does not carry the marker attribute and is
    /// never checked. `Some` carries the shared, immutable set - possibly
    /// empty, which callers treat exactly like "not marked".
    ///
    /// The first call per type inspects symbol metadata; every later call
    /// within the session is a cache read. Two threads racing on the same
    /// uncached type both compute the (equal) result and one insert is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Propagates host model failures. Malformed marker *arguments* never
    /// error; they fall back per-argument as described on
    /// [`RequirementSpec`].
    pub fn resolve(
        model: &dyn SymbolModel,
        ty: TypeHandle,
        marker: &MarkerContext,
        cache: &SessionCache,
    ) -> Result<Option<Arc<RequiredFields>>> {
        if let Some(cached) = cache.get(ty) {
            return Ok(cached);
        }

        let resolved = Self::resolve_uncached(model, ty, marker)?;
        Ok(cache.insert_if_absent(ty, resolved))
    }

    /// The actual symbol inspection behind a cache miss.
    fn resolve_uncached(
        model: &dyn SymbolModel,
        ty: TypeHandle,
        marker: &MarkerContext,
    ) -> Result<Option<Arc<RequiredFields>>> {
        let attributes = model.type_attributes(ty)?;
        let Some(marker_attribute) = attributes
            .iter()
            .find(|attribute| attribute.attribute_type == marker.marker())
        else {
            return Ok(None);
        };

        let spec = RequirementSpec::from_attribute(marker_attribute);

        let mut names = match spec.required {
            // Explicit allow-list mode: exactly the listed fields,
            // regardless of their mutability.
            Some(explicit) => explicit,
            // Automatic derivation: every field that is instance state and
            // still assignable after construction.
            None => model
                .type_fields(ty)?
                .into_iter()
                .filter(|field| field.is_assignable_instance_state())
                .map(|field| field.name)
                .collect(),
        };

        // Optional is orthogonal to the mode and always applied last.
        if let Some(optional) = spec.optional {
            names.retain(|name| !optional.iter().any(|excluded| excluded == name));
        }

        Ok(Some(Arc::new(RequiredFields::new(names))))
    }
}
