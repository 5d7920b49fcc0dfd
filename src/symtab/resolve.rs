use tracing::trace;

use super::scope::ImportEntry;
use super::symbol::Symbol;
use super::table::SymbolTable;
use crate::model::ImportKind;
use crate::qualified_id;

/// Read-only name resolution over a built [`SymbolTable`] (spec.md §4.C
/// "Import resolution" and "Qualified-name resolution").
///
/// Kept separate from `SymbolTable` itself — construction/mutation
/// (`add`, `get_or_create_scope`) and resolution are different concerns,
/// mirroring the teacher's split between
/// `semantic::symbol_table::table::SymbolTable` and
/// `semantic::resolver::name_resolver::Resolver`.
pub struct Resolver<'a> {
    table: &'a SymbolTable,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Resolve `name` as seen from `scope_id`.
    ///
    /// A qualified name (`A::B::C`) resolves its first segment from
    /// `scope_id`'s visible names, then walks the remaining segments as
    /// nested lookups in the resolved symbol's `body_scope`. A simple name
    /// walks the scope chain (`scope_id`, its parent, …, root), trying a
    /// local lookup and then that scope's imports at every level, and
    /// returns the first hit.
    pub fn resolve(&self, scope_id: &str, name: &str) -> Option<&'a Symbol> {
        if let Some((first, rest)) = qualified_id::split_first(name) {
            let head = self.resolve(scope_id, first)?;
            return self.resolve_path(head, rest);
        }

        let mut current = self.table.scope(scope_id);
        while let Some(scope) = current {
            if let Some(symbol) = scope.symbols.get(name) {
                return Some(symbol);
            }
            if let Some(symbol) = self.resolve_via_imports(&scope.imports, name) {
                return Some(symbol);
            }
            current = scope.parent.as_ref().and_then(|p| self.table.scope(p.as_ref()));
        }
        None
    }

    /// Walk `rest` (already split into `A::B` style remaining segments) as
    /// nested member lookups starting from `head`'s own body scope.
    fn resolve_path(&self, mut head: &'a Symbol, rest: &str) -> Option<&'a Symbol> {
        let mut remaining = rest;
        loop {
            let body_scope = head.body_scope.as_ref()?;
            let scope = self.table.scope(body_scope)?;
            match qualified_id::split_first(remaining) {
                Some((segment, tail)) => {
                    head = scope.symbols.get(segment)?;
                    remaining = tail;
                }
                None => return scope.symbols.get(remaining),
            }
        }
    }

    /// Try every import in a scope, in declaration order, per spec.md
    /// §4.C's three import kinds.
    fn resolve_via_imports(&self, imports: &[ImportEntry], name: &str) -> Option<&'a Symbol> {
        for entry in imports {
            let hit = match entry.kind {
                // `import A::B::X;` only ever satisfies a lookup for `X`.
                ImportKind::Direct => {
                    if qualified_id::last_segment(&entry.target) == name {
                        let root_id = self.table.root_id().clone();
                        self.resolve(&root_id, &entry.target)
                    } else {
                        None
                    }
                }
                // `import A::B::*;` / `import A::B::**;` — both resolve
                // only direct children of the bare namespace (spec.md §9,
                // the recursive-wildcard import imperfection is preserved
                // here, not fixed).
                ImportKind::NamespaceWildcard | ImportKind::RecursiveWildcard => self
                    .table
                    .scope(&entry.target)
                    .and_then(|target_scope| target_scope.symbols.get(name)),
            };
            if hit.is_some() {
                trace!(target = %entry.target, name, "resolved via import");
                return hit;
            }
        }
        None
    }
}
