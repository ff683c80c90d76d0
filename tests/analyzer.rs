//! End-to-end tests for the required-field checking session.
//!
//! These tests drive the full pipeline - marker resolution, requirement
//! resolution with caching, suppression filtering, and site verification -
//! over an in-memory [`SymbolModel`] with controlled type declarations,
//! mirroring how a host adapter would feed the engine.

use std::collections::HashMap;

use initcheck::prelude::*;

const MARKER: TypeHandle = TypeHandle(0x0100);
const SUPPRESSION: TypeHandle = TypeHandle(0x0101);

/// In-memory symbol model with canned types, fields, attributes and
/// assembly-level declarations.
#[derive(Default)]
struct TestModel {
    names: HashMap<String, TypeHandle>,
    attributes: HashMap<TypeHandle, Vec<AttributeInstance>>,
    fields: HashMap<TypeHandle, Vec<FieldMember>>,
    assembly: Vec<AttributeInstance>,
    /// Types whose member enumeration fails, to exercise the
    /// internal-error path.
    broken: Vec<TypeHandle>,
}

impl TestModel {
    /// A model that declares both checker attributes.
    fn new() -> Self {
        let mut model = TestModel::default();
        let names = MarkerNames::default();
        model.names.insert(names.marker_type, MARKER);
        model.names.insert(names.suppression_type, SUPPRESSION);
        model
    }

    /// Declares a type carrying the marker attribute with the given named
    /// arguments and fields.
    fn declare_marked(
        &mut self,
        ty: TypeHandle,
        named_args: Vec<NamedArgument>,
        fields: Vec<FieldMember>,
    ) {
        self.attributes
            .insert(ty, vec![AttributeInstance::new(MARKER, named_args)]);
        self.fields.insert(ty, fields);
    }

    /// Declares a type without the marker.
    fn declare_unmarked(&mut self, ty: TypeHandle, fields: Vec<FieldMember>) {
        self.attributes.insert(ty, Vec::new());
        self.fields.insert(ty, fields);
    }

    /// Adds an assembly-level suppression declaration for `scope`.
    fn suppress_scope(&mut self, scope: &str) {
        self.assembly.push(AttributeInstance::new(
            SUPPRESSION,
            vec![NamedArgument::new(
                "Scope",
                AttributeValue::String(scope.to_string()),
            )],
        ));
    }
}

impl SymbolModel for TestModel {
    fn type_by_name(&self, fully_qualified: &str) -> Option<TypeHandle> {
        self.names.get(fully_qualified).copied()
    }

    fn type_attributes(&self, ty: TypeHandle) -> Result<Vec<AttributeInstance>> {
        Ok(self.attributes.get(&ty).cloned().unwrap_or_default())
    }

    fn type_fields(&self, ty: TypeHandle) -> Result<Vec<FieldMember>> {
        if self.broken.contains(&ty) {
            return Err(Error::Model(format!("member table unavailable for {ty}")));
        }
        Ok(self.fields.get(&ty).cloned().unwrap_or_default())
    }

    fn assembly_attributes(&self, attribute_type: TypeHandle) -> Result<Vec<AttributeInstance>> {
        Ok(self
            .assembly
            .iter()
            .filter(|a| a.attribute_type == attribute_type)
            .cloned()
            .collect())
    }
}

fn string_list(names: &[&str]) -> AttributeValue {
    AttributeValue::Array(
        names
            .iter()
            .map(|name| AttributeValue::String(ToString::to_string(name)))
            .collect(),
    )
}

fn site(ty: TypeHandle, scope: &str, assigned: &[&str]) -> ConstructionSite {
    ConstructionSite::with_assignments(
        ty,
        scope,
        assigned.iter().copied(),
        SourceLocation::new("program.cs", 100, 105),
    )
}

fn begin(model: &TestModel) -> AnalysisSession<'_> {
    AnalysisSession::begin(model, &MarkerNames::default()).expect("marker should resolve")
}

/// Names of the missing fields, extracted from diagnostic messages in
/// emission order.
fn missing_fields(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .map(|d| {
            assert_eq!(d.rule, RuleId::RequiredFieldNotInitialized);
            let start = d.message.find('\'').unwrap() + 1;
            let end = d.message.rfind('\'').unwrap();
            d.message[start..end].to_string()
        })
        .collect()
}

#[test]
fn unmarked_types_are_never_checked() {
    let mut model = TestModel::new();
    let plain = TypeHandle(1);
    model.declare_unmarked(plain, vec![FieldMember::instance("X")]);

    let session = begin(&model);
    assert!(session.check_site(&site(plain, "App", &[])).is_empty());
    assert!(session.check_site(&site(plain, "App", &["X"])).is_empty());
}

#[test]
fn absent_marker_type_disables_the_whole_pass() {
    let model = TestModel::default(); // declares neither attribute
    assert!(AnalysisSession::begin(&model, &MarkerNames::default()).is_none());
}

/// The `Point` scenario: automatic derivation over fields `X`, `Y`
/// (instance, mutable) and `Label` (readonly).
#[test]
fn point_scenario_automatic_derivation() {
    let mut model = TestModel::new();
    let point = TypeHandle(1);
    model.declare_marked(
        point,
        Vec::new(),
        vec![
            FieldMember::instance("X"),
            FieldMember::instance("Y"),
            FieldMember::new("Label", FieldModifiers::READ_ONLY),
        ],
    );

    let session = begin(&model);

    // new Point { X = 1 } - exactly one diagnostic, for Y.
    let diagnostics = session.check_site(&site(point, "App", &["X"]));
    assert_eq!(missing_fields(&diagnostics), ["Y"]);

    // new Point { X = 1, Y = 2 } - clean.
    assert!(session.check_site(&site(point, "App", &["X", "Y"])).is_empty());

    // new Point { } - one diagnostic per missing field, declaration order.
    let diagnostics = session.check_site(&site(point, "App", &[]));
    assert_eq!(missing_fields(&diagnostics), ["X", "Y"]);
}

/// The `Config` scenario: `Required: ["Host","Port"], Optional: ["Port"]`.
#[test]
fn config_scenario_explicit_lists() {
    let mut model = TestModel::new();
    let config = TypeHandle(2);
    model.declare_marked(
        config,
        vec![
            NamedArgument::new("Required", string_list(&["Host", "Port"])),
            NamedArgument::new("Optional", string_list(&["Port"])),
        ],
        vec![
            FieldMember::instance("Host"),
            FieldMember::instance("Port"),
            FieldMember::instance("Timeout"),
        ],
    );

    let session = begin(&model);

    // new Config { } - exactly one diagnostic, for Host.
    let diagnostics = session.check_site(&site(config, "App", &[]));
    assert_eq!(missing_fields(&diagnostics), ["Host"]);

    assert!(session.check_site(&site(config, "App", &["Host"])).is_empty());
}

#[test]
fn explicit_required_applies_regardless_of_mutability() {
    let mut model = TestModel::new();
    let ty = TypeHandle(3);
    model.declare_marked(
        ty,
        vec![NamedArgument::new("Required", string_list(&["A", "B"]))],
        vec![
            FieldMember::new("A", FieldModifiers::READ_ONLY),
            FieldMember::new("B", FieldModifiers::STATIC),
            FieldMember::instance("C"),
        ],
    );

    let session = begin(&model);
    let diagnostics = session.check_site(&site(ty, "App", &[]));
    assert_eq!(missing_fields(&diagnostics), ["A", "B"]);
}

#[test]
fn optional_subtracts_from_automatic_derivation() {
    let mut model = TestModel::new();
    let ty = TypeHandle(4);
    model.declare_marked(
        ty,
        vec![NamedArgument::new("Optional", string_list(&["Y"]))],
        vec![FieldMember::instance("X"), FieldMember::instance("Y")],
    );

    let session = begin(&model);
    let diagnostics = session.check_site(&site(ty, "App", &[]));
    assert_eq!(missing_fields(&diagnostics), ["X"]);
}

#[test]
fn over_initialization_is_never_an_error() {
    let mut model = TestModel::new();
    let ty = TypeHandle(5);
    model.declare_marked(
        ty,
        Vec::new(),
        vec![FieldMember::instance("X"), FieldMember::instance("Y")],
    );

    let session = begin(&model);
    let diagnostics = session.check_site(&site(ty, "App", &["X", "Y", "Extra"]));
    assert!(diagnostics.is_empty());
}

#[test]
fn marked_type_with_no_qualifying_fields_stays_silent() {
    let mut model = TestModel::new();
    let ty = TypeHandle(6);
    model.declare_marked(
        ty,
        Vec::new(),
        vec![
            FieldMember::new("Shared", FieldModifiers::STATIC),
            FieldMember::new("Tag", FieldModifiers::READ_ONLY),
        ],
    );

    let session = begin(&model);
    assert!(session.check_site(&site(ty, "App", &[])).is_empty());
}

#[test]
fn suppressed_scope_skips_checking_but_siblings_are_still_checked() {
    let mut model = TestModel::new();
    let ty = TypeHandle(7);
    model.declare_marked(ty, Vec::new(), vec![FieldMember::instance("X")]);
    model.suppress_scope("App.Generated");

    let session = begin(&model);

    // Under-initialized but inside the suppressed scope: silent.
    assert!(session
        .check_site(&site(ty, "App.Generated", &[]))
        .is_empty());

    // Sibling and nested scopes are not exact matches: still checked.
    assert_eq!(
        session.check_site(&site(ty, "App.Handwritten", &[])).len(),
        1
    );
    assert_eq!(
        session
            .check_site(&site(ty, "App.Generated.Protos", &[]))
            .len(),
        1
    );
}

#[test]
fn undeterminable_scope_only_matches_explicit_empty_entry() {
    let mut model = TestModel::new();
    let ty = TypeHandle(8);
    model.declare_marked(ty, Vec::new(), vec![FieldMember::instance("X")]);
    model.suppress_scope("App");

    let session = begin(&model);
    assert_eq!(session.check_site(&site(ty, "", &[])).len(), 1);

    let mut model = TestModel::new();
    model.declare_marked(ty, Vec::new(), vec![FieldMember::instance("X")]);
    model.suppress_scope("");

    let session = begin(&model);
    assert!(session.check_site(&site(ty, "", &[])).is_empty());
}

#[test]
fn malformed_suppression_declarations_are_dropped_individually() {
    let mut model = TestModel::new();
    let ty = TypeHandle(9);
    model.declare_marked(ty, Vec::new(), vec![FieldMember::instance("X")]);

    // Missing the Scope argument entirely.
    model
        .assembly
        .push(AttributeInstance::new(SUPPRESSION, Vec::new()));
    // Wrong argument kind.
    model.assembly.push(AttributeInstance::new(
        SUPPRESSION,
        vec![NamedArgument::new("Scope", AttributeValue::Bool(true))],
    ));
    // Well-formed.
    model.suppress_scope("App.Generated");

    let session = begin(&model);
    assert_eq!(session.suppressions().len(), 1);
    assert!(session
        .check_site(&site(ty, "App.Generated", &[]))
        .is_empty());
}

#[test]
fn malformed_required_argument_falls_back_to_automatic_derivation() {
    let mut model = TestModel::new();
    let ty = TypeHandle(10);
    model.declare_marked(
        ty,
        vec![NamedArgument::new("Required", AttributeValue::Int(42))],
        vec![
            FieldMember::instance("X"),
            FieldMember::new("Tag", FieldModifiers::READ_ONLY),
        ],
    );

    let session = begin(&model);
    let diagnostics = session.check_site(&site(ty, "App", &[]));
    assert_eq!(missing_fields(&diagnostics), ["X"]);
}

#[test]
fn resolution_is_idempotent_within_and_across_sessions() {
    let mut model = TestModel::new();
    let ty = TypeHandle(11);
    model.declare_marked(
        ty,
        Vec::new(),
        vec![FieldMember::instance("X"), FieldMember::instance("Y")],
    );

    let session = begin(&model);
    let first = session.check_site(&site(ty, "App", &[]));
    let second = session.check_site(&site(ty, "App", &[]));
    assert_eq!(first, second);
    assert_eq!(session.types_inspected(), 1);
    session.end();

    // A fresh session recomputes from symbol data and agrees.
    let session = begin(&model);
    let third = session.check_site(&site(ty, "App", &[]));
    assert_eq!(first, third);
}

#[test]
fn internal_failure_becomes_a_diagnostic_and_other_sites_continue() {
    let mut model = TestModel::new();
    let healthy = TypeHandle(12);
    let broken = TypeHandle(13);
    model.declare_marked(healthy, Vec::new(), vec![FieldMember::instance("X")]);
    model.declare_marked(broken, Vec::new(), vec![FieldMember::instance("X")]);
    model.broken.push(broken);

    let session = begin(&model);

    let sites = vec![
        site(broken, "App", &[]),
        site(healthy, "App", &[]),
        site(healthy, "App", &["X"]),
    ];
    let diagnostics = session.check_all(&sites);

    let internal: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.rule == RuleId::InternalError)
        .collect();
    assert_eq!(internal.len(), 1);
    assert!(internal[0].message.contains("member table unavailable"));

    // The healthy under-initialized site was still checked.
    let missing: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.rule == RuleId::RequiredFieldNotInitialized)
        .collect();
    assert_eq!(missing.len(), 1);
}

#[test]
fn diagnostics_point_at_the_type_name_token() {
    let mut model = TestModel::new();
    let ty = TypeHandle(14);
    model.declare_marked(ty, Vec::new(), vec![FieldMember::instance("X")]);

    let session = begin(&model);
    let location = SourceLocation::new("src/widgets.cs", 512, 518);
    let construction = ConstructionSite::with_assignments(ty, "App", Vec::<String>::new(), location.clone());

    let diagnostics = session.check_site(&construction);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location, location);
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn parallel_batch_checking_agrees_with_sequential() {
    let mut model = TestModel::new();
    let point = TypeHandle(15);
    let config = TypeHandle(16);
    model.declare_marked(
        point,
        Vec::new(),
        vec![FieldMember::instance("X"), FieldMember::instance("Y")],
    );
    model.declare_marked(
        config,
        vec![NamedArgument::new("Required", string_list(&["Host"]))],
        vec![FieldMember::instance("Host")],
    );

    let session = begin(&model);

    let sites: Vec<ConstructionSite> = (0..200)
        .map(|i| match i % 4 {
            0 => site(point, "App", &[]),
            1 => site(point, "App", &["X", "Y"]),
            2 => site(config, "App", &[]),
            _ => site(config, "App", &["Host"]),
        })
        .collect();

    let mut parallel: Vec<String> = session
        .check_all(&sites)
        .into_iter()
        .map(|d| d.to_string())
        .collect();
    let mut sequential: Vec<String> = sites
        .iter()
        .flat_map(|s| session.check_site(s))
        .map(|d| d.to_string())
        .collect();

    parallel.sort();
    sequential.sort();
    assert_eq!(parallel, sequential);

    // 50 empty Point sites x2 fields + 50 empty Config sites x1 field.
    assert_eq!(parallel.len(), 150);

    // Both types resolved exactly once despite 200 sites.
    assert_eq!(session.types_inspected(), 2);
}

#[test]
fn rule_descriptors_expose_both_rules() {
    let descriptors = RuleId::descriptors();
    assert_eq!(descriptors.len(), 2);
    assert!(descriptors.iter().any(|d| d.code == "INIT001"));
    assert!(descriptors.iter().any(|d| d.code == "INIT999"));
}
