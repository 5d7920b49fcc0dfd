use std::collections::HashMap;

use tracing::debug;

use super::compat::accepts_type;
use super::cycle::detect_cycles;
use super::multiplicity::{bounds_are_consistent, parse_bound};
use super::options::ValidationOptions;
use super::redefinition::{find_redefined_by_name, multiplicity_narrows, type_narrows};
use crate::diagnostics::{suggestion_help, Diagnostic, DiagnosticCode, DiagnosticSink};
use crate::interner::Interner;
use crate::model::{Element, ElementKind, ImportKind, SemanticModel};
use crate::qualified_id;
use crate::symtab::{AddOutcome, ImportEntry, Resolver, Symbol, SymbolTable};

/// Build the shared symbol table across every model (spec.md §4.D
/// "Multi-model validation") and emit `E3004` for same-scope name
/// collisions, except the package-merge exception (spec.md §9): two
/// `Package` elements sharing a name and scope merge silently.
pub fn pass1_build_symbols(
    models: &[SemanticModel],
    by_id: &HashMap<&str, &Element>,
    interner: &mut Interner,
    options: &ValidationOptions,
    sink: &mut DiagnosticSink,
) -> SymbolTable {
    debug!(models = models.len(), "pass 1: building symbol table");
    let mut table = SymbolTable::new(interner);

    for model in models {
        for (index, element) in model.elements.iter().enumerate() {
            let Some(name) = element.name.clone() else {
                continue;
            };
            let display_name = name.clone();
            let owning_scope_id = element
                .parent_id
                .as_deref()
                .map(|p| table.get_or_create_scope(p, interner))
                .unwrap_or_else(|| table.root_id().clone());
            let body_scope = table.get_or_create_scope(&element.id, interner);

            let mut symbol = Symbol::new(name, element.id.clone(), element.id.clone(), index);
            symbol.body_scope = Some(body_scope);

            if let AddOutcome::AlreadyExists(existing) = table.add(&owning_scope_id, symbol) {
                if !options.check_duplicates {
                    continue;
                }
                let existing_is_package = by_id
                    .get(&*existing.element_id)
                    .map(|e| e.kind == ElementKind::Package)
                    .unwrap_or(false);
                if existing_is_package && element.kind == ElementKind::Package {
                    continue;
                }
                let mut diag = Diagnostic::create(
                    DiagnosticCode::E3004DuplicateDefinition,
                    element.range.clone(),
                    format!("'{display_name}' is already defined in this scope"),
                );
                if let Some(previous) = by_id.get(&*existing.element_id) {
                    diag = diag.add_note("previous definition here", Some(previous.range.clone()));
                }
                sink.emit(diag);
            }
        }
    }

    // "After elements, walk imports and attach each to its owner scope."
    for model in models {
        for import in &model.imports {
            let owner_scope = table.get_or_create_scope(&import.owner_scope, interner);
            let target = match import.kind {
                ImportKind::Direct => import.target.clone(),
                ImportKind::NamespaceWildcard | ImportKind::RecursiveWildcard => {
                    interner.intern(import.bare_namespace())
                }
            };
            table.register_import(
                &owner_scope,
                ImportEntry {
                    target,
                    kind: import.kind,
                    is_public: import.is_public,
                },
            );
        }
    }

    // "Also synthesize an implicit namespace-wildcard import at the root
    // for every library package, so library names resolve globally."
    let root = table.root_id().clone();
    for model in models {
        for element in &model.elements {
            if element.kind == ElementKind::Package && element.is_library {
                table.register_import(
                    &root,
                    ImportEntry {
                        target: element.id.clone(),
                        kind: ImportKind::NamespaceWildcard,
                        is_public: true,
                    },
                );
            }
        }
    }

    table
}

/// Resolve every `typed_by` edge and check the target's kind against the
/// usage's compatibility table (Pass 2, spec.md §4.D). `specializes` and
/// `references` are never resolved here — `E3001` is scoped to "undefined
/// type" (spec.md §4.G), which only `typed_by` can produce.
pub fn pass2_type_resolution(
    models: &[SemanticModel],
    table: &SymbolTable,
    by_id: &HashMap<&str, &Element>,
    options: &ValidationOptions,
    sink: &mut DiagnosticSink,
) {
    debug!("pass 2: type resolution");
    let resolver = Resolver::new(table);

    for model in models {
        for element in &model.elements {
            let owning_scope = element.parent_id.as_deref().unwrap_or("");
            for target in element.typed_by.iter() {
                check_edge(element, target, owning_scope, &resolver, table, by_id, options, sink);
            }
        }
    }
}

fn check_edge(
    element: &Element,
    target: &str,
    owning_scope: &str,
    resolver: &Resolver<'_>,
    table: &SymbolTable,
    by_id: &HashMap<&str, &Element>,
    options: &ValidationOptions,
    sink: &mut DiagnosticSink,
) {
    let Some(symbol) = resolver.resolve(owning_scope, target) else {
        if options.check_undefined_types {
            let mut diag = Diagnostic::create(
                DiagnosticCode::E3001UndefinedReference,
                element.range.clone(),
                format!("cannot resolve '{target}'"),
            );
            if options.suggest_corrections {
                let suggestions = table.find_similar(owning_scope, target, options.max_suggestions);
                if let Some(help) = suggestion_help(&suggestions) {
                    diag = diag.add_help(help);
                }
            }
            sink.emit(diag);
        }
        return;
    };

    if !options.check_type_compatibility {
        return;
    }

    if let Some(target_element) = by_id.get(&*symbol.element_id) {
        if !accepts_type(element.kind, target_element.kind) {
            sink.emit(Diagnostic::create(
                DiagnosticCode::E3006TypeMismatch,
                element.range.clone(),
                format!(
                    "'{target}' is a {:?}, which {:?} cannot be typed by",
                    target_element.kind, element.kind
                ),
            ));
        }
    }
}

/// Circular `typed_by`/`specializes`/`references` chains (Pass 3, spec.md
/// §4.D). `redefines` edges never participate, and detection below
/// `max_walk_depth` steps is skipped — see [`detect_cycles`].
pub fn pass3_circular_specialization(
    models: &[SemanticModel],
    by_id: &HashMap<&str, &Element>,
    options: &ValidationOptions,
    sink: &mut DiagnosticSink,
) {
    debug!("pass 3: circular specialization");
    let elements: Vec<&Element> = models.iter().flat_map(|m| m.elements.iter()).collect();
    for cycle in detect_cycles(&elements, options.max_walk_depth) {
        let path = cycle
            .iter()
            .map(|id| &**id)
            .collect::<Vec<_>>()
            .join(" -> ");
        let range = cycle
            .first()
            .and_then(|id| by_id.get(&**id))
            .map(|e| e.range.clone())
            .unwrap_or_else(|| fallback_range());
        sink.emit(Diagnostic::create(
            DiagnosticCode::E3005CircularSpecialization,
            range,
            format!("circular specialization: {path}"),
        ));
    }
}

fn fallback_range() -> crate::base::SourceRange {
    crate::base::SourceRange::new(
        crate::base::FileId::new(std::rc::Rc::from("")),
        crate::base::Position::new(0, 0, 0),
        crate::base::Position::new(0, 0, 0),
    )
}

/// Parse and bound-check every multiplicity (Pass 4, spec.md §4.D). Both a
/// malformed literal and `lower > upper` are `E3007`. An element with only
/// a lower bound is interpreted as `[lower..lower]`; an element with
/// neither bound carries no multiplicity to check.
pub fn pass4_multiplicity(models: &[SemanticModel], sink: &mut DiagnosticSink) {
    debug!("pass 4: multiplicity");
    for model in models {
        for element in &model.elements {
            let lower_text = match element.multiplicity_lower.as_deref() {
                Some(l) => l,
                None => continue,
            };
            let upper_text = element.multiplicity_upper.as_deref().unwrap_or(lower_text);
            let lower = parse_bound(lower_text);
            let upper = parse_bound(upper_text);
            match (lower, upper) {
                (Some(lower), Some(upper)) => {
                    if !bounds_are_consistent(lower, upper) {
                        let diag = Diagnostic::create(
                            DiagnosticCode::E3007Multiplicity,
                            element.range.clone(),
                            format!("multiplicity lower bound '{lower_text}' exceeds upper bound '{upper_text}'"),
                        )
                        .add_help(format!("swap the bounds to {upper_text}..{lower_text}"));
                        sink.emit(diag);
                    }
                }
                _ => {
                    sink.emit(Diagnostic::create(
                        DiagnosticCode::E3007Multiplicity,
                        element.range.clone(),
                        format!("malformed multiplicity '{lower_text}..{upper_text}'"),
                    ));
                }
            }
        }
    }
}

/// Check every `redefines` edge against the inheritance chain of its
/// enclosing type (Pass 5, spec.md §4.D): a name that resolves to no
/// feature is `E3002`; one that resolves but narrows neither type nor
/// multiplicity is `E3008`.
pub fn pass5_redefinition(models: &[SemanticModel], by_id: &HashMap<&str, &Element>, table: &SymbolTable, options: &ValidationOptions, sink: &mut DiagnosticSink) {
    debug!("pass 5: redefinition narrowing");
    let resolver = Resolver::new(table);

    for model in models {
        for element in &model.elements {
            if element.redefines.is_empty() {
                continue;
            }
            let Some(parent_scope) = element.parent_id.as_deref() else {
                continue;
            };
            let Some(&parent_type) = by_id.get(parent_scope) else {
                continue;
            };

            for target_id in &element.redefines {
                let redefined = if qualified_id::split_first(target_id).is_some() {
                    resolver.resolve(parent_scope, target_id).and_then(|symbol| by_id.get(&*symbol.element_id).copied())
                } else {
                    find_redefined_by_name(parent_type, target_id, by_id)
                };

                let Some(redefined) = redefined else {
                    if options.check_undefined_features {
                        sink.emit(Diagnostic::create(
                            DiagnosticCode::E3002UndefinedFeature,
                            element.range.clone(),
                            format!("'{target_id}' is not a feature of '{}' or its supertypes", parent_type.id),
                        ));
                    }
                    continue;
                };

                if !options.check_redefinition_compat {
                    continue;
                }

                if let (Some(new_type), Some(orig_type_id)) = (element.typed_by.first(), redefined.typed_by.first()) {
                    if let Some(&orig_type) = by_id.get(&**orig_type_id) {
                        if !type_narrows(new_type, orig_type, by_id) {
                            sink.emit(Diagnostic::create(
                                DiagnosticCode::E3008RedefinitionError,
                                element.range.clone(),
                                format!("redefinition of '{target_id}': type is not a subtype"),
                            ));
                            continue;
                        }
                    }
                }

                if let (Some(new_lower), Some(new_upper), Some(orig_lower), Some(orig_upper)) = (
                    element.multiplicity_lower.as_deref(),
                    element.multiplicity_upper.as_deref(),
                    redefined.multiplicity_lower.as_deref(),
                    redefined.multiplicity_upper.as_deref(),
                ) {
                    if !multiplicity_narrows(new_lower, new_upper, orig_lower, orig_upper) {
                        sink.emit(Diagnostic::create(
                            DiagnosticCode::E3008RedefinitionError,
                            element.range.clone(),
                            format!("redefinition of '{target_id}': widens original"),
                        ));
                    }
                }
            }
        }
    }
}

/// Resolve every import's bare namespace from the root scope (Pass 6,
/// spec.md §4.D, §4.C). Unresolved targets are `E3003`.
pub fn pass6_imports(models: &[SemanticModel], table: &SymbolTable, sink: &mut DiagnosticSink) {
    debug!("pass 6: import resolution");
    let resolver = Resolver::new(table);
    let root = table.root_id().clone();
    for model in models {
        for import in &model.imports {
            if resolver.resolve(&root, import.bare_namespace()).is_none() {
                sink.emit(Diagnostic::create(
                    DiagnosticCode::E3003UnresolvedImport,
                    import.range.clone(),
                    format!("cannot resolve import target '{}'", import.bare_namespace()),
                ));
            }
        }
    }
}

/// Warn when a non-abstract usage's resolved `typed_by` target is abstract
/// (Pass 7, spec.md §4.D, `W1003`). Scoped to usages, and to the resolved
/// target rather than the as-written reference, the same way Pass 2
/// resolves `typed_by` — a simple name like `Real` only resolves against
/// `by_id` once looked up through the symbol table.
pub fn pass7_abstract_instantiation(models: &[SemanticModel], table: &SymbolTable, by_id: &HashMap<&str, &Element>, sink: &mut DiagnosticSink) {
    debug!("pass 7: abstract instantiation");
    let resolver = Resolver::new(table);
    for model in models {
        for element in &model.elements {
            if element.is_abstract || !element.is_usage() {
                continue;
            }
            let owning_scope = element.parent_id.as_deref().unwrap_or("");
            for target_id in element.typed_by.iter() {
                let Some(target) = resolver.resolve(owning_scope, target_id).and_then(|symbol| by_id.get(&*symbol.element_id)) else {
                    continue;
                };
                if target.is_abstract {
                    sink.emit(Diagnostic::create(
                        DiagnosticCode::W1003AbstractInstantiation,
                        element.range.clone(),
                        format!("instantiates abstract '{target_id}' without redeclaring it abstract"),
                    ));
                }
            }
        }
    }
}
