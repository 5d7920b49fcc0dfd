use crate::base::SourceRange;
use crate::interner::IStr;

/// The directed-link kinds spec.md §3 enumerates for `Relationships`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Connection,
    Flow,
    Allocation,
    Satisfy,
    Verify,
    Transition,
    Succession,
    Bind,
}

/// A directed link between two elements, referenced by interned id rather
/// than by direct handle — spec.md §9 calls this out explicitly so that
/// reference edges can cycle without the element graph itself needing
/// back-pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub source: IStr,
    pub target: IStr,
    pub range: SourceRange,
}

impl Relationship {
    pub fn new(kind: RelationshipKind, source: IStr, target: IStr, range: SourceRange) -> Self {
        Self {
            kind,
            source,
            target,
            range,
        }
    }
}
