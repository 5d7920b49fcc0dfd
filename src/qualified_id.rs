//! Qualified-id structural helpers shared by the symbol table, query
//! engine, and modifier. An id is `::`-separated local names with no
//! adjacent or leading/trailing separators (spec.md §3, §6).

/// Split a qualified id into its local-name segments.
///
/// Returns an empty slice for an empty id (the root). Never returns an
/// empty segment — spec.md's invariant is that splitting on `::` yields a
/// non-empty sequence of local names.
pub fn segments(id: &str) -> Vec<&str> {
    if id.is_empty() {
        Vec::new()
    } else {
        id.split("::").collect()
    }
}

/// The last segment of a qualified id — an element's local `name` is
/// this, derived from its `id` (spec.md §3).
pub fn last_segment(id: &str) -> &str {
    id.rsplit("::").next().unwrap_or(id)
}

/// The id with its last `::segment` trimmed — `parent_path` from spec.md
/// §4.E, also used by the symbol table to walk a scope's ancestry.
pub fn parent_path(id: &str) -> Option<&str> {
    id.rfind("::").map(|pos| &id[..pos])
}

/// Split a qualified name on the *first* `::`, returning `(prefix, rest)`.
/// Used by `resolve` when a name is qualified (spec.md §4.C).
pub fn split_first(name: &str) -> Option<(&str, &str)> {
    name.find("::").map(|pos| (&name[..pos], &name[pos + 2..]))
}

pub fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}::{child}")
    }
}
