use indexmap::IndexMap;

use super::symbol::Symbol;
use crate::interner::IStr;
use crate::model::ImportKind;

/// One resolved import declared inside a scope (spec.md §4.C). `target` is
/// already normalized: for `Direct` it is the full qualified name, for
/// `NamespaceWildcard`/`RecursiveWildcard` it has the `::*`/`::**` suffix
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    pub target: IStr,
    pub kind: ImportKind,
    pub is_public: bool,
}

/// A namespace: packages, definitions, and usages with bodies each open
/// one. `id` is the scope's qualified path; the root scope uses the empty
/// string, matching `Element::parent_id == None` meaning "top level"
/// (spec.md §3, §4.C).
#[derive(Debug, Clone)]
pub struct Scope {
    pub id: IStr,
    pub parent: Option<IStr>,
    pub symbols: IndexMap<IStr, Symbol>,
    pub imports: Vec<ImportEntry>,
}

impl Scope {
    pub fn new(id: IStr, parent: Option<IStr>) -> Self {
        Self {
            id,
            parent,
            symbols: IndexMap::new(),
            imports: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
