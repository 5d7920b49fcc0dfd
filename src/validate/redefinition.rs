use std::collections::{HashMap, HashSet};

use super::multiplicity::{bounds_are_consistent, parse_bound, Bound};
use crate::model::Element;

const MAX_REDEFINITION_DEPTH: usize = 20;

/// Walk `start`'s `typed_by` ∪ `specializes` edges outward, breadth-first,
/// up to `MAX_REDEFINITION_DEPTH` steps (Pass 5, spec.md §4.D).
fn supertype_closure<'a>(start: &'a Element, by_id: &HashMap<&str, &'a Element>) -> Vec<&'a Element> {
    let mut visited = HashSet::new();
    let mut frontier: Vec<&str> = start.supertype_edges().map(|s| &**s).collect();
    let mut out = Vec::new();
    let mut depth = 0;

    while !frontier.is_empty() && depth < MAX_REDEFINITION_DEPTH {
        let mut next = Vec::new();
        for id in frontier {
            if !visited.insert(id) {
                continue;
            }
            if let Some(&element) = by_id.get(id) {
                out.push(element);
                next.extend(element.supertype_edges().map(|s| &**s));
            }
        }
        frontier = next;
        depth += 1;
    }
    out
}

/// Find a member named `name` directly owned by `ancestor` (`member.parent_id
/// == ancestor.id`). Used to search an inheritance chain for a redefined
/// feature by simple name (Pass 5, spec.md §4.D).
fn find_member_by_name<'a>(ancestor: &Element, name: &str, by_id: &HashMap<&str, &'a Element>) -> Option<&'a Element> {
    by_id
        .values()
        .find(|e| e.parent_id.as_deref() == Some(&*ancestor.id) && e.name.as_deref() == Some(name))
        .copied()
}

/// Search the inheritance chain of `parent_type` (its `typed_by` and
/// `specializes`, transitively, excluding `parent_type`'s own members) for a
/// feature named `name` (Pass 5, spec.md §4.D, simple-name `redefines`).
pub fn find_redefined_by_name<'a>(parent_type: &Element, name: &str, by_id: &HashMap<&str, &'a Element>) -> Option<&'a Element> {
    supertype_closure(parent_type, by_id)
        .into_iter()
        .find_map(|ancestor| find_member_by_name(ancestor, name, by_id))
}

/// `true` iff `new_type` may legally redefine `orig_type` per spec.md §4.D
/// Pass 5: equal, or reachable from `orig_type` via its own transitive
/// `typed_by` ∪ `specializes` closure.
pub fn type_narrows(new_type: &str, orig_type: &Element, by_id: &HashMap<&str, &Element>) -> bool {
    new_type == &*orig_type.id || supertype_closure(orig_type, by_id).iter().any(|e| &*e.id == new_type)
}

/// `true` iff `new`'s multiplicity is at least as narrow as `orig`'s:
/// `new_lower >= orig_lower` and (`orig_upper` unbounded or `new_upper <=
/// orig_upper`) (Pass 5, spec.md §4.D).
pub fn multiplicity_narrows(new_lower: &str, new_upper: &str, orig_lower: &str, orig_upper: &str) -> bool {
    let (Some(new_lower), Some(new_upper), Some(orig_lower), Some(orig_upper)) =
        (parse_bound(new_lower), parse_bound(new_upper), parse_bound(orig_lower), parse_bound(orig_upper))
    else {
        return false;
    };
    bounds_are_consistent(new_lower, new_upper) && lower_is_at_least(new_lower, orig_lower) && upper_is_at_most(new_upper, orig_upper)
}

fn lower_is_at_least(new: Bound, orig: Bound) -> bool {
    match (new, orig) {
        (Bound::Finite(new), Bound::Finite(orig)) => new >= orig,
        (Bound::Unbounded, _) => true,
        (Bound::Finite(_), Bound::Unbounded) => false,
    }
}

fn upper_is_at_most(new: Bound, orig: Bound) -> bool {
    match (new, orig) {
        (Bound::Finite(new), Bound::Finite(orig)) => new <= orig,
        (_, Bound::Unbounded) => true,
        (Bound::Unbounded, Bound::Finite(_)) => false,
    }
}
