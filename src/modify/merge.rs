use std::collections::HashMap;

use crate::base::{Position, SourceRange};
use crate::error::{CoreError, CoreResult};
use crate::interner::{IStr, Interner};
use crate::model::{BodyStatementKind, Element, ElementKind, MetadataUsage, SemanticModel, Visibility};
use crate::qualified_id;

/// Counts merge reports back to the caller (spec.md §4.F "Reporting":
/// merge returns `(added_count, replaced_count)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    pub added: usize,
    pub replaced: usize,
}

/// Merge `fragment` into `base` as children of `target_scope` (spec.md
/// §4.F "Merge transform"). Pure — both inputs are untouched, the merged
/// model is returned fresh.
///
/// `create_scope` controls step 2: when `target_scope` is absent from
/// `base`, synthesize the missing ancestry as package elements instead of
/// failing with [`CoreError::NotFound`].
pub fn merge_fragment(
    base: &SemanticModel,
    fragment: &SemanticModel,
    target_scope: &str,
    create_scope: bool,
    interner: &mut Interner,
) -> CoreResult<(SemanticModel, MergeReport)> {
    let mut elements = base.elements.clone();

    if !target_scope.is_empty() && base.find_element(target_scope).is_none() {
        if create_scope {
            elements.extend(synthesize_ancestry(&elements, target_scope, fragment, interner));
        } else {
            return Err(CoreError::NotFound(target_scope.to_string()));
        }
    }

    let (unwrapped_doc, unwrapped_metadata, wrapper_id) = auto_unwrap(fragment, target_scope);
    let (id_map, remapped) = remap(fragment, wrapper_id.as_ref(), target_scope, interner);
    let incoming_ids: std::collections::HashSet<IStr> = remapped.iter().map(|e| e.id.clone()).collect();

    let mut report = MergeReport::default();
    let mut replaced_ids: Vec<IStr> = Vec::new();
    for incoming in remapped {
        let incoming = rewrite_edges(incoming, &id_map);
        match elements.iter().position(|e| e.id == incoming.id) {
            Some(pos) => {
                elements[pos] = substitute(&elements[pos], &incoming);
                report.replaced += 1;
                replaced_ids.push(incoming.id);
            }
            None => {
                let parent_id = incoming.parent_id.clone();
                let placed = assign_append_offset(&elements, parent_id.as_ref(), incoming);
                elements.push(placed);
                report.added += 1;
            }
        }
    }
    drop_unredeclared_descendants(&mut elements, &replaced_ids, &incoming_ids);

    // The wrapper's own documentation/metadata re-applies to the target
    // scope element it was unwrapped in favor of (spec.md §4.F step 1).
    if unwrapped_doc.is_some() || !unwrapped_metadata.is_empty() {
        if let Some(pos) = elements.iter().position(|e| &*e.id == target_scope) {
            if elements[pos].documentation.is_none() {
                elements[pos].documentation = unwrapped_doc;
            }
            merge_metadata(&mut elements[pos].metadata, &unwrapped_metadata);
        }
    }

    let mut relationships = base.relationships.clone();
    for rel in &fragment.relationships {
        let mut rel = rel.clone();
        rel.source = id_map.get(&rel.source).cloned().unwrap_or(rel.source);
        rel.target = id_map.get(&rel.target).cloned().unwrap_or(rel.target);
        if !relationships.contains(&rel) {
            relationships.push(rel);
        }
    }

    let mut imports = base.imports.clone();
    for import in &fragment.imports {
        let mut import = import.clone();
        import.owner_scope = id_map.get(&import.owner_scope).cloned().unwrap_or(import.owner_scope);
        let duplicate = imports.iter().any(|existing| {
            existing.owner_scope == import.owner_scope && existing.target == import.target && existing.kind == import.kind
        });
        if !duplicate {
            imports.push(import);
        }
    }

    Ok((
        SemanticModel {
            source_name: base.source_name.clone(),
            elements,
            relationships,
            imports,
            aliases: base.aliases.clone(),
        },
        report,
    ))
}

/// Step 1: a fragment whose sole top-level element is a package named
/// exactly like the target scope's local name is a wrapper, not real
/// content — strip it and remember its documentation/metadata so they can
/// be re-applied to the target scope itself.
fn auto_unwrap(fragment: &SemanticModel, target_scope: &str) -> (Option<IStr>, Vec<MetadataUsage>, Option<IStr>) {
    let top_level: Vec<&Element> = fragment.elements.iter().filter(|e| e.parent_id.is_none()).collect();
    let target_local = qualified_id::last_segment(target_scope);
    match top_level.as_slice() {
        [only] if only.kind == ElementKind::Package && qualified_id::last_segment(&only.id) == target_local => {
            (only.documentation.clone(), only.metadata.clone(), Some(only.id.clone()))
        }
        _ => (None, Vec::new(), None),
    }
}

/// `id` with the wrapper's own id (and the `::` after it) trimmed off the
/// front, if `id` actually starts with it.
fn strip_wrapper(id: &str, wrapper_id: Option<&str>) -> String {
    match wrapper_id {
        Some(w) => id.strip_prefix(w).and_then(|rest| rest.strip_prefix("::")).unwrap_or(id).to_string(),
        None => id.to_string(),
    }
}

/// Steps 2-3: prefix every surviving fragment element's id (and its
/// `parent_id`) with `target_scope`. Returns the old-id -> new-id map used
/// to fix up cross-references afterward (including the wrapper's own id,
/// which now maps onto `target_scope` itself).
fn remap(
    fragment: &SemanticModel,
    wrapper_id: Option<&IStr>,
    target_scope: &str,
    interner: &mut Interner,
) -> (HashMap<IStr, IStr>, Vec<Element>) {
    let mut id_map = HashMap::new();
    if let Some(w) = wrapper_id {
        id_map.insert(w.clone(), interner.intern(target_scope));
    }

    let mut result = Vec::new();
    for element in &fragment.elements {
        if Some(&element.id) == wrapper_id {
            continue;
        }
        let local = strip_wrapper(&element.id, wrapper_id.map(|s| &**s));
        let new_id = interner.intern_string(qualified_id::join(target_scope, &local));
        id_map.insert(element.id.clone(), new_id.clone());

        let new_parent = match &element.parent_id {
            None => interner.intern(target_scope),
            Some(p) if Some(p) == wrapper_id => interner.intern(target_scope),
            Some(p) => {
                let local_parent = strip_wrapper(p, wrapper_id.map(|s| &**s));
                interner.intern_string(qualified_id::join(target_scope, &local_parent))
            }
        };

        let mut rewritten = element.clone();
        rewritten.id = new_id;
        rewritten.parent_id = Some(new_parent);
        result.push(rewritten);
    }
    (id_map, result)
}

/// Rewrite `typed_by`/`specializes`/`redefines`/`references` edges that
/// point at another remapped fragment element; edges pointing outside the
/// fragment (e.g. at an existing library type already in `base`) are left
/// untouched.
fn rewrite_edges(mut element: Element, id_map: &HashMap<IStr, IStr>) -> Element {
    let rewrite_list = |list: &mut Vec<IStr>| {
        for id in list.iter_mut() {
            if let Some(new_id) = id_map.get(id) {
                *id = new_id.clone();
            }
        }
    };
    rewrite_list(&mut element.typed_by);
    rewrite_list(&mut element.specializes);
    rewrite_list(&mut element.redefines);
    rewrite_list(&mut element.references);
    element
}

/// Step 5(c): a redeclared child replaces its whole subtree. Any base
/// descendant of a replaced id that the fragment didn't also redeclare is
/// dropped, recursively, so stale grandchildren don't survive a
/// redeclaration that omitted them.
fn drop_unredeclared_descendants(elements: &mut Vec<Element>, replaced_ids: &[IStr], incoming_ids: &std::collections::HashSet<IStr>) {
    if replaced_ids.is_empty() {
        return;
    }
    let mut drop: std::collections::HashSet<IStr> = std::collections::HashSet::new();
    loop {
        let mut grew = false;
        for element in elements.iter() {
            if drop.contains(&element.id) || incoming_ids.contains(&element.id) {
                continue;
            }
            if let Some(parent) = &element.parent_id {
                if replaced_ids.iter().any(|r| r == parent) || drop.contains(parent) {
                    drop.insert(element.id.clone());
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }
    if !drop.is_empty() {
        elements.retain(|e| !drop.contains(&e.id));
    }
}

/// Step 2's `create_scope` branch: synthesize every missing ancestor of
/// `target_scope` as a bare package element.
fn synthesize_ancestry(existing: &[Element], target_scope: &str, fragment: &SemanticModel, interner: &mut Interner) -> Vec<Element> {
    let file = fragment
        .elements
        .first()
        .map(|e| e.range.file.clone())
        .unwrap_or_else(|| crate::base::FileId::new(interner.intern("<merge>")));
    let placeholder = SourceRange::new(file, Position::new(0, 0, 0), Position::new(0, 0, 0));

    let mut created = Vec::new();
    let mut prefix = String::new();
    for segment in qualified_id::segments(target_scope) {
        let id = qualified_id::join(&prefix, segment);
        let already_present = existing.iter().any(|e| &*e.id == id) || created.iter().any(|e: &Element| &*e.id == id);
        if !already_present {
            let parent = if prefix.is_empty() { None } else { Some(interner.intern(&prefix)) };
            let mut package = Element::new(interner.intern_string(id.clone()), ElementKind::Package, placeholder.clone());
            package.name = Some(interner.intern(segment));
            package.parent_id = parent;
            created.push(package);
        }
        prefix = id;
    }
    created
}

/// Step 7: place a newly-added element's byte offset past its siblings'
/// maximum, unless every sibling is already at offset zero.
fn assign_append_offset(elements: &[Element], parent: Option<&IStr>, mut element: Element) -> Element {
    let max_offset = elements
        .iter()
        .filter(|e| e.parent_id.as_ref() == parent)
        .map(|e| e.range.start_offset())
        .max()
        .unwrap_or(0);
    let offset = if max_offset > 0 { max_offset + 1 } else { 0 };
    element.range.start.offset = offset;
    element.range.end.offset = offset;
    element
}

/// Step 6: the hybrid replace-by-id/keep-by-name rule. An incoming field
/// overwrites the original's only when the fragment actually set it;
/// otherwise the original's value survives. Base's source location is
/// inherited so sibling order-by-offset is preserved. Body
/// `ShorthandFeature` statements union-merge by `feature_name`; everything
/// else in the body is appended if not already present verbatim.
fn substitute(original: &Element, incoming: &Element) -> Element {
    let mut merged = original.clone();
    merged.kind = incoming.kind;
    merged.name = incoming.name.clone().or_else(|| original.name.clone());

    if !incoming.typed_by.is_empty() {
        merged.typed_by = incoming.typed_by.clone();
    }
    if !incoming.specializes.is_empty() {
        merged.specializes = incoming.specializes.clone();
    }
    if !incoming.redefines.is_empty() {
        merged.redefines = incoming.redefines.clone();
    }
    if !incoming.references.is_empty() {
        merged.references = incoming.references.clone();
    }

    merged.multiplicity_lower = incoming.multiplicity_lower.clone().or(original.multiplicity_lower.clone());
    merged.multiplicity_upper = incoming.multiplicity_upper.clone().or(original.multiplicity_upper.clone());
    merged.default_value = incoming.default_value.clone().or(original.default_value.clone());

    merged.is_abstract = original.is_abstract || incoming.is_abstract;
    merged.is_variation = original.is_variation || incoming.is_variation;
    merged.is_readonly = original.is_readonly || incoming.is_readonly;
    merged.is_derived = original.is_derived || incoming.is_derived;
    merged.is_ref = original.is_ref || incoming.is_ref;
    merged.is_library = original.is_library || incoming.is_library;

    merged.direction = incoming.direction.or(original.direction);
    if incoming.visibility != Visibility::default() {
        merged.visibility = incoming.visibility;
    }
    merged.documentation = incoming.documentation.clone().or(original.documentation.clone());

    merge_metadata(&mut merged.metadata, &incoming.metadata);
    merge_body(&mut merged.body, &incoming.body);

    merged
}

fn merge_metadata(base: &mut Vec<MetadataUsage>, incoming: &[MetadataUsage]) {
    for usage in incoming {
        if !base.iter().any(|m| m.metadata_type == usage.metadata_type) {
            base.push(usage.clone());
        }
    }
}

fn merge_body(base: &mut Vec<crate::model::BodyStatement>, incoming: &[crate::model::BodyStatement]) {
    for statement in incoming {
        if statement.kind == BodyStatementKind::ShorthandFeature {
            let existing = base
                .iter_mut()
                .find(|s| s.kind == BodyStatementKind::ShorthandFeature && s.feature_name == statement.feature_name);
            match existing {
                Some(slot) => *slot = statement.clone(),
                None => base.push(statement.clone()),
            }
        } else if !base.contains(statement) {
            base.push(statement.clone());
        }
    }
}
