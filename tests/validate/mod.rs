//! Integration tests for the seven-pass validator, covering the concrete
//! scenarios spec.md §8 calls out end to end (model in, diagnostics out)
//! rather than unit-testing individual pass helpers.

use std::rc::Rc;

use crate::helpers::elem;
use sysml_core::diagnostics::DiagnosticCode;
use sysml_core::interner::Interner;
use sysml_core::model::{ElementKind, Import, ImportKind, SemanticModel};
use sysml_core::validate::{validate, validate_all, ValidationOptions};

fn codes(outcome: &sysml_core::validate::ValidationOutcome) -> Vec<DiagnosticCode> {
    outcome.diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn scenario_1_duplicate_sibling_names_produce_exactly_one_e3004() {
    let mut model = SemanticModel::new(None);
    model.elements.push(elem("Engine", None, ElementKind::PartDef, 1));
    model.elements.push(elem("Engine", None, ElementKind::PartDef, 2));

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());

    let dupes: Vec<_> = outcome
        .diagnostics()
        .iter()
        .filter(|d| d.code == DiagnosticCode::E3004DuplicateDefinition)
        .collect();
    assert_eq!(dupes.len(), 1);
    assert!(dupes[0].annotations.iter().any(|a| a.range.as_ref().map(|r| r.start.line) == Some(1)));
}

#[test]
fn scenario_2_typo_typed_by_produces_e3001_with_suggestion() {
    let mut model = SemanticModel::new(None);
    model.elements.push(elem("Engine", None, ElementKind::PartDef, 1));
    let mut wheel = elem("wheel", None, ElementKind::PartUsage, 2);
    wheel.typed_by.push(Rc::from("Enginne"));
    model.elements.push(wheel);

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());

    let diag = outcome
        .diagnostics()
        .iter()
        .find(|d| d.code == DiagnosticCode::E3001UndefinedReference)
        .expect("expected E3001");
    assert!(diag.annotations.iter().any(|a| a.message.contains("Engine")));
}

#[test]
fn scenario_3_three_way_cycle_reports_rotation_order() {
    let mut model = SemanticModel::new(None);
    let mut a = elem("A", None, ElementKind::PartDef, 1);
    a.typed_by.push(Rc::from("B"));
    let mut b = elem("B", None, ElementKind::PartDef, 2);
    b.specializes.push(Rc::from("C"));
    let mut c = elem("C", None, ElementKind::PartDef, 3);
    c.typed_by.push(Rc::from("A"));
    model.elements.push(a);
    model.elements.push(b);
    model.elements.push(c);

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());

    let cycle_diags: Vec<_> = outcome
        .diagnostics()
        .iter()
        .filter(|d| d.code == DiagnosticCode::E3005CircularSpecialization)
        .collect();
    assert_eq!(cycle_diags.len(), 1);
    assert_eq!(cycle_diags[0].message, "circular specialization: A -> B -> C -> A");
}

#[test]
fn scenario_4_redefines_edge_alone_is_not_a_cycle() {
    let mut model = SemanticModel::new(None);
    let mut a = elem("A", None, ElementKind::PartDef, 1);
    a.specializes.push(Rc::from("B"));
    let mut b = elem("B", None, ElementKind::PartDef, 2);
    b.redefines.push(Rc::from("A::x"));
    model.elements.push(a);
    model.elements.push(b);

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());

    assert!(codes(&outcome).iter().all(|c| *c != DiagnosticCode::E3005CircularSpecialization));
}

#[test]
fn scenario_5_inverted_multiplicity_bounds_suggest_a_swap() {
    let mut model = SemanticModel::new(None);
    let mut wheels = elem("wheels", None, ElementKind::PartUsage, 1);
    wheels.multiplicity_lower = Some(Rc::from("5"));
    wheels.multiplicity_upper = Some(Rc::from("2"));
    model.elements.push(wheels);

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());

    let diag = outcome
        .diagnostics()
        .iter()
        .find(|d| d.code == DiagnosticCode::E3007Multiplicity)
        .expect("expected E3007");
    assert!(diag.message.contains('5') && diag.message.contains('2'));
    assert!(diag.annotations.iter().any(|a| a.message.contains("swap the bounds to 2..5")));
}

#[test]
fn validator_purity_runs_produce_identical_diagnostics() {
    let mut model = SemanticModel::new(None);
    model.elements.push(elem("Engine", None, ElementKind::PartDef, 1));
    model.elements.push(elem("Engine", None, ElementKind::PartDef, 2));

    let mut interner = Interner::new();
    let first = validate(&model, &mut interner, &ValidationOptions::default());
    let second = validate(&model, &mut interner, &ValidationOptions::default());

    assert_eq!(
        first.diagnostics().iter().map(|d| (d.code, d.message.clone())).collect::<Vec<_>>(),
        second.diagnostics().iter().map(|d| (d.code, d.message.clone())).collect::<Vec<_>>(),
    );
}

#[test]
fn multi_model_validation_shares_one_symbol_table_across_files() {
    let mut file_a = SemanticModel::new(Some(Rc::from("a.sysml")));
    file_a.elements.push(elem("Vehicle", None, ElementKind::PartDef, 1));

    let mut file_b = SemanticModel::new(Some(Rc::from("b.sysml")));
    let mut car = elem("Car", None, ElementKind::PartDef, 1);
    car.specializes.push(Rc::from("Vehicle"));
    file_b.elements.push(car);

    let mut interner = Interner::new();
    let outcome = validate_all(&[file_a, file_b], &mut interner, &ValidationOptions::default());
    assert!(outcome.is_ok(), "Vehicle from file a should resolve for Car in file b");
}

#[test]
fn declared_import_is_registered_and_resolves_the_imported_name() {
    let mut model = SemanticModel::new(None);
    model.elements.push(elem("Lib", None, ElementKind::Package, 1));
    model.elements.push(elem("Lib::Engine", Some("Lib"), ElementKind::PartDef, 2));
    model.elements.push(elem("Consumer", None, ElementKind::Package, 3));
    let mut usage = elem("Consumer::engine", Some("Consumer"), ElementKind::PartUsage, 4);
    usage.typed_by.push(Rc::from("Engine"));
    model.elements.push(usage);
    model.imports.push(Import::new(
        Rc::from("Consumer"),
        Rc::from("Lib::Engine"),
        ImportKind::Direct,
        true,
        crate::helpers::range_at(4),
    ));

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());
    assert!(outcome.is_ok(), "diagnostics: {:?}", outcome.diagnostics());
}

#[test]
fn import_to_an_undefined_namespace_is_e3003() {
    let mut model = SemanticModel::new(None);
    model.elements.push(elem("Consumer", None, ElementKind::Package, 1));
    model.imports.push(Import::new(
        Rc::from("Consumer"),
        Rc::from("Nowhere::*"),
        ImportKind::NamespaceWildcard,
        true,
        crate::helpers::range_at(1),
    ));

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());
    assert!(codes(&outcome).contains(&DiagnosticCode::E3003UnresolvedImport));
}

#[test]
fn abstract_instantiation_is_a_warning_not_an_error() {
    let mut model = SemanticModel::new(None);
    let mut base = elem("Base", None, ElementKind::PartDef, 1);
    base.is_abstract = true;
    let mut concrete = elem("concrete", None, ElementKind::PartUsage, 2);
    concrete.typed_by.push(Rc::from("Base"));
    model.elements.push(base);
    model.elements.push(concrete);

    let mut interner = Interner::new();
    let outcome = validate(&model, &mut interner, &ValidationOptions::default());
    assert!(outcome.is_ok(), "a warning must never flip the outcome to SemanticError");
    assert!(codes(&outcome).contains(&DiagnosticCode::W1003AbstractInstantiation));
}
