use std::collections::HashSet;

use crate::interner::IStr;
use crate::model::SemanticModel;
use crate::query::Pattern;

/// Remove every element matching `pattern`, plus everything nested under
/// it (cascade), and prune any relationship, import, or alias that
/// referenced a removed element (spec.md §4.F "Delete transform").
///
/// Pure: `model` is untouched, a new one is returned (spec.md §3
/// "Lifecycle" — modifier transforms always produce fresh copies). Returns
/// the deleted count alongside the new model (spec.md §4.F "Reporting").
pub fn delete_matching(model: &SemanticModel, pattern: &Pattern) -> (SemanticModel, usize) {
    let mut removed: HashSet<IStr> = model
        .elements
        .iter()
        .filter(|e| pattern.matches(&e.id))
        .map(|e| e.id.clone())
        .collect();

    loop {
        let mut grew = false;
        for element in &model.elements {
            if removed.contains(&element.id) {
                continue;
            }
            if let Some(parent) = &element.parent_id {
                if removed.contains(parent) {
                    removed.insert(element.id.clone());
                    grew = true;
                }
            }
        }
        if !grew {
            break;
        }
    }

    if removed.is_empty() {
        return (model.clone(), 0);
    }

    let deleted_count = removed.len();
    let result = SemanticModel {
        source_name: model.source_name.clone(),
        elements: model
            .elements
            .iter()
            .filter(|e| !removed.contains(&e.id))
            .cloned()
            .collect(),
        relationships: model
            .relationships
            .iter()
            .filter(|r| !removed.contains(&r.source) && !removed.contains(&r.target))
            .cloned()
            .collect(),
        imports: model
            .imports
            .iter()
            .filter(|i| !removed.contains(&i.owner_scope))
            .cloned()
            .collect(),
        aliases: model
            .aliases
            .iter()
            .filter(|a| !removed.contains(&a.scope_id) && !removed.contains(&a.id))
            .cloned()
            .collect(),
    };
    (result, deleted_count)
}
