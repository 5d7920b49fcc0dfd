//! Integration tests for the structural modifier, covering spec.md §8's
//! "merge with auto-unwrap" scenario plus the delete/merge/plan surface
//! end to end through the public API.

use crate::helpers::elem;
use sysml_core::interner::Interner;
use sysml_core::model::{ElementKind, SemanticModel};
use sysml_core::modify::{apply, delete_matching, merge_fragment, Operation, Plan};
use sysml_core::query::Pattern;

#[test]
fn scenario_6_merge_auto_unwraps_a_package_wrapper_named_like_the_target() {
    let mut base = SemanticModel::new(None);
    base.elements.push(elem("Vehicle", None, ElementKind::PartDef, 1));

    let mut fragment = SemanticModel::new(None);
    fragment.elements.push(elem("Vehicle", None, ElementKind::Package, 1));
    fragment
        .elements
        .push(elem("Vehicle::engine", Some("Vehicle"), ElementKind::PartUsage, 2));

    let mut interner = Interner::new();
    let (merged, report) = merge_fragment(&base, &fragment, "Vehicle", false, &mut interner).unwrap();

    assert!(merged.find_element("Vehicle::engine").is_some());
    assert_eq!(
        merged.elements.iter().filter(|e| &*e.id == "Vehicle").count(),
        1,
        "the wrapper package must not survive alongside the original Vehicle"
    );
    assert_eq!(report.added, 1);
}

#[test]
fn merge_into_a_missing_scope_synthesizes_ancestry_when_requested() {
    let base = SemanticModel::new(None);
    let mut fragment = SemanticModel::new(None);
    fragment.elements.push(elem("thruster", None, ElementKind::PartUsage, 1));

    let mut interner = Interner::new();
    let (merged, _) = merge_fragment(&base, &fragment, "Spacecraft::Propulsion", true, &mut interner).unwrap();

    assert!(merged.find_element("Spacecraft").is_some());
    assert!(merged.find_element("Spacecraft::Propulsion").is_some());
    assert!(merged.find_element("Spacecraft::Propulsion::thruster").is_some());
}

#[test]
fn merge_is_pure_and_leaves_base_and_fragment_untouched() {
    let mut base = SemanticModel::new(None);
    base.elements.push(elem("Vehicle", None, ElementKind::PartDef, 1));
    let base_snapshot = base.elements.len();

    let mut fragment = SemanticModel::new(None);
    fragment.elements.push(elem("engine", None, ElementKind::PartUsage, 1));
    let fragment_snapshot = fragment.elements.len();

    let mut interner = Interner::new();
    let (_merged, _) = merge_fragment(&base, &fragment, "Vehicle", false, &mut interner).unwrap();

    assert_eq!(base.elements.len(), base_snapshot);
    assert_eq!(fragment.elements.len(), fragment_snapshot);
}

#[test]
fn delete_cascades_and_is_pure() {
    let mut model = SemanticModel::new(None);
    model.elements.push(elem("Vehicle", None, ElementKind::PartDef, 1));
    model
        .elements
        .push(elem("Vehicle::engine", Some("Vehicle"), ElementKind::PartUsage, 2));
    model.elements.push(elem("Other", None, ElementKind::PartDef, 3));
    let original_count = model.elements.len();

    let (result, deleted) = delete_matching(&model, &Pattern::parse("Vehicle"));

    assert_eq!(deleted, 2);
    assert_eq!(result.elements.len(), 1);
    assert!(result.find_element("Other").is_some());
    assert_eq!(model.elements.len(), original_count, "delete_matching must not mutate its input");
}

#[test]
fn a_plan_chaining_delete_then_merge_reports_combined_totals() {
    let mut base = SemanticModel::new(None);
    base.elements.push(elem("Vehicle", None, ElementKind::PartDef, 1));
    base.elements.push(elem("Deprecated", None, ElementKind::PartDef, 2));

    let mut fragment = SemanticModel::new(None);
    fragment.elements.push(elem("engine", None, ElementKind::PartUsage, 1));

    let plan = Plan::new(false)
        .delete(Pattern::parse("Deprecated"))
        .set(fragment, "Vehicle", false);

    let mut interner = Interner::new();
    let (result, outcome) = apply(&base, &plan, &mut interner).unwrap();

    assert!(result.find_element("Deprecated").is_none());
    assert!(result.find_element("Vehicle::engine").is_some());
    assert_eq!(outcome.deleted, 1);
    assert_eq!(outcome.added, 1);
}

#[test]
fn a_dry_run_plan_reports_totals_without_mutating_the_base() {
    let mut base = SemanticModel::new(None);
    base.elements.push(elem("Vehicle", None, ElementKind::PartDef, 1));

    let plan = Plan::new(true).delete(Pattern::parse("Vehicle"));
    let mut interner = Interner::new();
    let (result, outcome) = apply(&base, &plan, &mut interner).unwrap();

    assert_eq!(outcome.deleted, 1);
    assert!(result.find_element("Vehicle").is_some(), "dry run must return the base unchanged");
}

#[test]
fn plan_set_into_a_missing_scope_without_create_scope_propagates_not_found() {
    let base = SemanticModel::new(None);
    let fragment = SemanticModel::new(None);
    let plan = Plan::new(false).set(fragment, "Nowhere", false);
    let mut interner = Interner::new();
    assert!(apply(&base, &plan, &mut interner).is_err());
}

#[test]
fn operation_enum_variants_are_constructible_directly() {
    let pattern_op = Operation::Delete(Pattern::parse("Anything"));
    match pattern_op {
        Operation::Delete(p) => assert!(p.matches("Anything")),
        Operation::Set { .. } => panic!("expected Delete"),
    }
}
