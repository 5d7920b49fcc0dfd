use crate::base::SourceRange;
use crate::interner::IStr;

/// The three import semantics spec.md §3/§4.C distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// `import A::B::X;` — a single named target.
    Direct,
    /// `import A::B::*;` — every direct member of `A::B`.
    NamespaceWildcard,
    /// `import A::B::**;` — nominally every member transitively, though
    /// spec.md §9 documents this as behaving identically to
    /// `NamespaceWildcard` in this implementation (no nested-scope
    /// traversal). Preserved, not "fixed" — see DESIGN.md.
    RecursiveWildcard,
}

/// A reference from one scope to another namespace or element
/// (`Semantic Model`'s `Imports` sequence, spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Qualified id of the scope this import is declared in.
    pub owner_scope: IStr,
    /// The raw target, with any `::*` / `::**` suffix still attached.
    pub target: IStr,
    pub kind: ImportKind,
    pub is_public: bool,
    pub range: SourceRange,
}

impl Import {
    pub fn new(
        owner_scope: IStr,
        target: IStr,
        kind: ImportKind,
        is_public: bool,
        range: SourceRange,
    ) -> Self {
        Self {
            owner_scope,
            target,
            kind,
            is_public,
            range,
        }
    }

    /// `target` with any trailing `::*` / `::**` stripped — the bare
    /// namespace Pass 6 resolves from the root scope.
    pub fn bare_namespace(&self) -> &str {
        self.target
            .strip_suffix("::**")
            .or_else(|| self.target.strip_suffix("::*"))
            .unwrap_or(&self.target)
    }
}
