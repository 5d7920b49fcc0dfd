//! The seven-pass semantic validator (spec.md §4.D).
//!
//! Each pass is independently toggleable via [`ValidationOptions`] and
//! runs in a fixed order: symbol table construction with duplicate
//! detection, type resolution and compatibility, circular specialization,
//! multiplicity bounds, redefinition narrowing, import resolution, and
//! the abstract-instantiation warning. Passes never mutate the
//! [`crate::model::SemanticModel`] they read — see
//! [`crate::modify`] for the crate's only mutating surface.

mod compat;
mod cycle;
mod multiplicity;
mod options;
mod passes;
mod redefinition;

pub use options::ValidationOptions;

use std::collections::HashMap;

use crate::diagnostics::Diagnostic;
use crate::interner::Interner;
use crate::model::{Element, SemanticModel};
use crate::symtab::SymbolTable;

/// The built symbol table plus every diagnostic emitted while validating
/// it, regardless of whether any were errors.
#[derive(Debug)]
pub struct ValidatedModel {
    pub table: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Top-level result of [`validate`] (spec.md §7: semantic-rule violations
/// are latched diagnostics, not a `Result` error type).
#[derive(Debug)]
pub enum ValidationOutcome {
    Ok(ValidatedModel),
    SemanticError(ValidatedModel),
}

impl ValidationOutcome {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ValidationOutcome::Ok(v) | ValidationOutcome::SemanticError(v) => &v.diagnostics,
        }
    }

    pub fn table(&self) -> &SymbolTable {
        match self {
            ValidationOutcome::Ok(v) | ValidationOutcome::SemanticError(v) => &v.table,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationOutcome::Ok(_))
    }
}

/// Validate a single model (spec.md §4.D's entry point for the common
/// case — a thin wrapper over [`validate_all`] with a one-element slice).
pub fn validate(model: &SemanticModel, interner: &mut Interner, options: &ValidationOptions) -> ValidationOutcome {
    validate_all(std::slice::from_ref(model), interner, options)
}

/// Validate several models against one shared symbol table (spec.md §4.D
/// "Multi-model validation"): every file's elements are visible to every
/// other file's references, as if compiled as one unit.
pub fn validate_all(models: &[SemanticModel], interner: &mut Interner, options: &ValidationOptions) -> ValidationOutcome {
    let by_id: HashMap<&str, &Element> = models
        .iter()
        .flat_map(|m| m.elements.iter())
        .map(|e| (&*e.id, e))
        .collect();

    let mut sink = crate::diagnostics::DiagnosticSink::new();
    let table = passes::pass1_build_symbols(models, &by_id, interner, options, &mut sink);

    if options.check_undefined_types || options.check_type_compatibility {
        passes::pass2_type_resolution(models, &table, &by_id, options, &mut sink);
    }
    if options.check_circular_specialization {
        passes::pass3_circular_specialization(models, &by_id, options, &mut sink);
    }
    if options.check_multiplicity {
        passes::pass4_multiplicity(models, &mut sink);
    }
    if options.check_undefined_features || options.check_redefinition_compat {
        passes::pass5_redefinition(models, &by_id, &table, options, &mut sink);
    }
    if options.check_imports {
        passes::pass6_imports(models, &table, &mut sink);
    }
    if options.warn_abstract_instantiation {
        passes::pass7_abstract_instantiation(models, &table, &by_id, &mut sink);
    }

    let has_errors = sink.has_errors();
    let validated = ValidatedModel {
        table,
        diagnostics: sink.into_diagnostics(),
    };
    if has_errors {
        ValidationOutcome::SemanticError(validated)
    } else {
        ValidationOutcome::Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{FileId, Position, SourceRange};
    use crate::diagnostics::DiagnosticCode;
    use crate::model::{ElementKind, Import, ImportKind};
    use std::rc::Rc;

    fn range() -> SourceRange {
        SourceRange::new(
            FileId::new(Rc::from("t.sysml")),
            Position::new(0, 0, 0),
            Position::new(0, 0, 0),
        )
    }

    fn named(id: &str, kind: ElementKind) -> Element {
        let mut e = Element::new(Rc::from(id), kind, range());
        e.name = Some(Rc::from(id));
        e
    }

    #[test]
    fn duplicate_non_package_names_produce_e3004() {
        let mut model = SemanticModel::new(None);
        model.elements.push(named("Engine", ElementKind::PartDef));
        model.elements.push(named("Engine", ElementKind::PartDef));
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(!outcome.is_ok());
        assert!(outcome
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::E3004DuplicateDefinition));
    }

    #[test]
    fn duplicate_packages_merge_without_diagnostics() {
        let mut model = SemanticModel::new(None);
        model.elements.push(named("Shared", ElementKind::Package));
        model.elements.push(named("Shared", ElementKind::Package));
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(outcome.is_ok());
    }

    #[test]
    fn unresolved_type_reference_produces_e3001_with_suggestion() {
        let mut model = SemanticModel::new(None);
        let engine = named("Enginne", ElementKind::PartDef);
        let mut wheel = named("wheel", ElementKind::PartUsage);
        wheel.typed_by.push(Rc::from("Engine"));
        model.elements.push(engine);
        model.elements.push(wheel);
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        let diag = outcome
            .diagnostics()
            .iter()
            .find(|d| d.code == DiagnosticCode::E3001UndefinedReference)
            .expect("expected an undefined reference diagnostic");
        assert!(diag.annotations.iter().any(|a| a.message.contains("Enginne")));
    }

    #[test]
    fn malformed_multiplicity_produces_e3007() {
        let mut model = SemanticModel::new(None);
        let mut part = named("wheels", ElementKind::PartUsage);
        part.multiplicity_lower = Some(Rc::from("abc"));
        part.multiplicity_upper = Some(Rc::from("*"));
        model.elements.push(part);
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(outcome
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::E3007Multiplicity));
    }

    #[test]
    fn lower_only_multiplicity_is_treated_as_exact_bound() {
        let mut model = SemanticModel::new(None);
        let mut part = named("wheels", ElementKind::PartUsage);
        part.multiplicity_lower = Some(Rc::from("4"));
        model.elements.push(part);
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(
            !outcome.diagnostics().iter().any(|d| d.code == DiagnosticCode::E3007Multiplicity),
            "a lower-only multiplicity of '4' should be read as the valid range [4..4]"
        );
    }

    #[test]
    fn bounds_violation_produces_e3007() {
        let mut model = SemanticModel::new(None);
        let mut part = named("wheels", ElementKind::PartUsage);
        part.multiplicity_lower = Some(Rc::from("4"));
        part.multiplicity_upper = Some(Rc::from("1"));
        model.elements.push(part);
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(outcome
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::E3007Multiplicity));
    }

    #[test]
    fn redefining_an_unknown_feature_produces_e3002() {
        let mut model = SemanticModel::new(None);
        let mut part_def = named("WheelDef", ElementKind::PartDef);
        part_def.name = Some(Rc::from("WheelDef"));
        let mut redefine = named("WheelDef::override", ElementKind::PartUsage);
        redefine.name = Some(Rc::from("override"));
        redefine.parent_id = Some(Rc::from("WheelDef"));
        redefine.redefines.push(Rc::from("nonexistent"));
        model.elements.push(part_def);
        model.elements.push(redefine);
        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(outcome
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::E3002UndefinedFeature));
    }

    #[test]
    fn redefinition_widening_multiplicity_produces_e3008() {
        let mut model = SemanticModel::new(None);
        let mut wheel_def = named("WheelDef", ElementKind::PartDef);
        wheel_def.name = Some(Rc::from("WheelDef"));
        let mut diameter = named("WheelDef::diameter", ElementKind::AttributeUsage);
        diameter.name = Some(Rc::from("diameter"));
        diameter.parent_id = Some(Rc::from("WheelDef"));
        diameter.multiplicity_lower = Some(Rc::from("1"));
        diameter.multiplicity_upper = Some(Rc::from("1"));

        let mut offroad_def = named("OffroadWheelDef", ElementKind::PartDef);
        offroad_def.name = Some(Rc::from("OffroadWheelDef"));
        offroad_def.specializes.push(Rc::from("WheelDef"));
        let mut override_diameter = named("OffroadWheelDef::diameter", ElementKind::AttributeUsage);
        override_diameter.name = Some(Rc::from("diameter"));
        override_diameter.parent_id = Some(Rc::from("OffroadWheelDef"));
        override_diameter.redefines.push(Rc::from("diameter"));
        override_diameter.multiplicity_lower = Some(Rc::from("0"));
        override_diameter.multiplicity_upper = Some(Rc::from("2"));

        model.elements.push(wheel_def);
        model.elements.push(diameter);
        model.elements.push(offroad_def);
        model.elements.push(override_diameter);

        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(outcome
            .diagnostics()
            .iter()
            .any(|d| d.code == DiagnosticCode::E3008RedefinitionError));
    }

    #[test]
    fn declared_direct_import_makes_a_name_resolvable_without_qualification() {
        let mut model = SemanticModel::new(None);
        let mut pkg = named("Pkg", ElementKind::Package);
        pkg.name = Some(Rc::from("Pkg"));
        let mut part_def = named("Pkg::Engine", ElementKind::PartDef);
        part_def.name = Some(Rc::from("Engine"));
        part_def.parent_id = Some(Rc::from("Pkg"));

        let mut other = named("Other", ElementKind::Package);
        other.name = Some(Rc::from("Other"));
        let mut usage = named("Other::engine", ElementKind::PartUsage);
        usage.name = Some(Rc::from("engine"));
        usage.parent_id = Some(Rc::from("Other"));
        usage.typed_by.push(Rc::from("Engine"));

        model.elements.push(pkg);
        model.elements.push(part_def);
        model.elements.push(other);
        model.elements.push(usage);
        model.imports.push(Import::new(
            Rc::from("Other"),
            Rc::from("Pkg::Engine"),
            ImportKind::Direct,
            true,
            range(),
        ));

        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(
            !outcome.diagnostics().iter().any(|d| d.code == DiagnosticCode::E3001UndefinedReference),
            "import should have made 'Engine' resolvable from 'Other::engine'"
        );
    }

    #[test]
    fn library_package_names_resolve_globally_without_an_explicit_import() {
        let mut model = SemanticModel::new(None);
        let mut lib = named("ScalarValues", ElementKind::Package);
        lib.name = Some(Rc::from("ScalarValues"));
        lib.is_library = true;
        let mut real_def = named("ScalarValues::Real", ElementKind::AttributeDef);
        real_def.name = Some(Rc::from("Real"));
        real_def.parent_id = Some(Rc::from("ScalarValues"));

        let mut consumer = named("Consumer", ElementKind::Package);
        consumer.name = Some(Rc::from("Consumer"));
        let mut mass = named("Consumer::mass", ElementKind::AttributeUsage);
        mass.name = Some(Rc::from("mass"));
        mass.parent_id = Some(Rc::from("Consumer"));
        mass.typed_by.push(Rc::from("Real"));

        model.elements.push(lib);
        model.elements.push(real_def);
        model.elements.push(consumer);
        model.elements.push(mass);

        let mut interner = Interner::new();
        let outcome = validate(&model, &mut interner, &ValidationOptions::default());
        assert!(
            !outcome.diagnostics().iter().any(|d| d.code == DiagnosticCode::E3001UndefinedReference),
            "a library package's names should resolve globally without an explicit import"
        );
    }
}
