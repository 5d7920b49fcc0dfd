use crate::base::SourceRange;
use crate::interner::IStr;

/// Local re-naming of an external qualified name (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// The fully qualified id this alias is registered under.
    pub id: IStr,
    pub name: IStr,
    /// The qualified name of the element being aliased.
    pub target: IStr,
    pub scope_id: IStr,
    pub range: SourceRange,
}

impl Alias {
    pub fn new(id: IStr, name: IStr, target: IStr, scope_id: IStr, range: SourceRange) -> Self {
        Self {
            id,
            name,
            target,
            scope_id,
            range,
        }
    }
}
