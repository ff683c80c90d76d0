//! Construction-site verification.

use crate::analysis::RequiredFields;
use crate::diagnostics::Diagnostic;
use crate::model::ConstructionSite;

/// Diffs a construction site's initializer assignments against its type's
/// required-field set.
pub struct SiteVerifier;

impl SiteVerifier {
    /// Emits one diagnostic per required field missing from `site`'s
    /// initializer, in the required set's canonical order, anchored at the
    /// site's type-name location.
    ///
    /// Assignments to fields outside the required set are never reported;
    /// over-initialization is not an error. When every required field is
    /// assigned the result is empty.
    #[must_use]
    pub fn verify(site: &ConstructionSite, required: &RequiredFields) -> Vec<Diagnostic> {
        required
            .names()
            .iter()
            .filter(|name| !site.assigned_fields.contains(name.as_str()))
            .map(|name| Diagnostic::missing_field(name, &site.location))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{RuleId, SourceLocation};
    use crate::model::TypeHandle;

    fn required(names: &[&str]) -> RequiredFields {
        RequiredFields::new(names.iter().map(ToString::to_string).collect())
    }

    fn site(assigned: &[&str]) -> ConstructionSite {
        ConstructionSite::with_assignments(
            TypeHandle::new(1),
            "App",
            assigned.iter().copied(),
            SourceLocation::new("program.cs", 10, 15),
        )
    }

    #[test]
    fn test_all_assigned_yields_nothing() {
        let diagnostics = SiteVerifier::verify(&site(&["X", "Y"]), &required(&["X", "Y"]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_one_missing_field_yields_one_diagnostic() {
        let diagnostics = SiteVerifier::verify(&site(&["X"]), &required(&["X", "Y"]));

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, RuleId::RequiredFieldNotInitialized);
        assert!(diagnostics[0].message.contains("'Y'"));
        assert_eq!(diagnostics[0].location.file, "program.cs");
    }

    #[test]
    fn test_one_diagnostic_per_missing_field_in_order() {
        let diagnostics = SiteVerifier::verify(&site(&["B"]), &required(&["A", "B", "C", "D"]));

        let named: Vec<&str> = diagnostics
            .iter()
            .map(|d| {
                let start = d.message.find('\'').unwrap() + 1;
                let end = d.message.rfind('\'').unwrap();
                &d.message[start..end]
            })
            .collect();
        assert_eq!(named, ["A", "C", "D"]);
    }

    #[test]
    fn test_empty_initializer_reports_every_required_field() {
        let diagnostics = SiteVerifier::verify(&site(&[]), &required(&["X", "Y"]));
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_over_initialization_is_never_an_error() {
        let diagnostics =
            SiteVerifier::verify(&site(&["X", "Y", "Extra", "More"]), &required(&["X", "Y"]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_required_set_yields_nothing() {
        let diagnostics = SiteVerifier::verify(&site(&[]), &required(&[]));
        assert!(diagnostics.is_empty());
    }
}
