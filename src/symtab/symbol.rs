use crate::interner::IStr;

/// The `(name, qualified-id, element-pointer)` triple a scope stores for
/// lookup (spec.md §3). The "element-pointer" is the defining element's id
/// plus its index into the owning `SemanticModel.elements`, so a resolved
/// symbol can be turned back into an `&Element` without a second scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: IStr,
    pub qualified_id: IStr,
    pub element_id: IStr,
    pub element_index: usize,
    /// The scope holding this symbol's own members, if it has a body
    /// (packages, definitions) — filled in once that child scope exists.
    pub body_scope: Option<IStr>,
}

impl Symbol {
    pub fn new(name: IStr, qualified_id: IStr, element_id: IStr, element_index: usize) -> Self {
        Self {
            name,
            qualified_id,
            element_id,
            element_index,
            body_scope: None,
        }
    }
}
