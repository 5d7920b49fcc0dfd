use indexmap::IndexMap;
use tracing::trace;

use super::scope::{ImportEntry, Scope};
use super::symbol::Symbol;
use crate::interner::{IStr, Interner};
use crate::qualified_id;
use crate::similarity::{lev_distance, max_allowed_distance};

/// Result of [`SymbolTable::add`] — distinguishes a fresh binding from one
/// that collided with an existing local name, which is how Pass 1 detects
/// `E3004` without a separate lookup-then-insert (spec.md §4.C, §4.D).
#[derive(Debug)]
pub enum AddOutcome {
    Inserted,
    /// Carries an owned clone (cheap — every field is an `Rc`/`usize`) so
    /// callers can keep mutating the table (e.g. creating the new
    /// element's own body scope) without holding a borrow open.
    AlreadyExists(Symbol),
}

/// Scoped symbol table: a tree of [`Scope`]s keyed by qualified id, each
/// holding its own local name table and import list (spec.md §4.C).
///
/// Built once per validation run (or once per file, then merged for
/// multi-model validation — spec.md §4.D "Multi-model validation") and
/// read by the validator, query engine, and modifier afterward.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: IndexMap<IStr, Scope>,
    root_id: IStr,
}

impl SymbolTable {
    pub fn new(interner: &mut Interner) -> Self {
        let root_id = interner.intern("");
        let mut scopes = IndexMap::new();
        scopes.insert(root_id.clone(), Scope::new(root_id.clone(), None));
        Self { scopes, root_id }
    }

    pub fn root_id(&self) -> &IStr {
        &self.root_id
    }

    pub fn scope(&self, id: &str) -> Option<&Scope> {
        self.scopes.get(id)
    }

    pub fn scope_mut(&mut self, id: &str) -> Option<&mut Scope> {
        self.scopes.get_mut(id)
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    pub fn scope_ids(&self) -> impl Iterator<Item = &IStr> {
        self.scopes.keys()
    }

    /// Ensure a scope exists for `id`, creating its full ancestor chain
    /// (via `parent_path`) if necessary. Returns the interned scope id.
    pub fn get_or_create_scope(&mut self, id: &str, interner: &mut Interner) -> IStr {
        if let Some((existing_id, _)) = self.scopes.get_key_value(id) {
            return existing_id.clone();
        }

        let parent_id = match qualified_id::parent_path(id) {
            Some(parent) => self.get_or_create_scope(parent, interner),
            None => self.root_id.clone(),
        };

        let interned = interner.intern(id);
        trace!(scope = %interned, parent = %parent_id, "creating scope");
        self.scopes
            .insert(interned.clone(), Scope::new(interned.clone(), Some(parent_id)));
        interned
    }

    /// Bind `symbol` into `scope_id`'s local name table under `symbol.name`.
    /// Returns the existing symbol if one was already bound under that
    /// name — the caller (Pass 1) decides whether that is a conflict.
    pub fn add(&mut self, scope_id: &str, symbol: Symbol) -> AddOutcome {
        let scope = self
            .scopes
            .get_mut(scope_id)
            .expect("add into a scope that was never created");
        if let Some(existing) = scope.symbols.get(&symbol.name) {
            AddOutcome::AlreadyExists(existing.clone())
        } else {
            let name = symbol.name.clone();
            scope.symbols.insert(name.clone(), symbol);
            trace!(scope = %scope_id, name = %name, "bound symbol");
            AddOutcome::Inserted
        }
    }

    pub fn register_import(&mut self, scope_id: &str, entry: ImportEntry) {
        if let Some(scope) = self.scopes.get_mut(scope_id) {
            trace!(scope = %scope_id, target = %entry.target, "registering import");
            scope.imports.push(entry);
        }
    }

    /// Local-only lookup: does not walk parent scopes or imports. See
    /// [`super::resolve::Resolver::resolve`] for full name resolution.
    pub fn lookup_local(&self, scope_id: &str, name: &str) -> Option<&Symbol> {
        self.scopes.get(scope_id)?.symbols.get(name)
    }

    /// "Did you mean?" suggestions: local names in `scope_id` and its
    /// ancestors within Levenshtein distance of `name`, closest first,
    /// capped at `max_suggestions` (spec.md §4.C `find_similar`).
    pub fn find_similar(&self, scope_id: &str, name: &str, max_suggestions: usize) -> Vec<IStr> {
        let threshold = max_allowed_distance(name);
        let mut candidates: Vec<(usize, IStr)> = Vec::new();
        let mut current = self.scopes.get(scope_id);
        while let Some(scope) = current {
            for candidate in scope.symbols.keys() {
                if &**candidate == name {
                    continue;
                }
                let distance = lev_distance(candidate, name);
                if distance <= threshold {
                    candidates.push((distance, candidate.clone()));
                }
            }
            current = scope.parent.as_ref().and_then(|p| self.scopes.get(p.as_ref()));
        }
        candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        candidates.dedup_by(|a, b| a.1 == b.1);
        candidates
            .into_iter()
            .take(max_suggestions)
            .map(|(_, name)| name)
            .collect()
    }
}
