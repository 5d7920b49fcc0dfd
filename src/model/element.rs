use super::kind::ElementKind;
use crate::base::SourceRange;
use crate::interner::IStr;

/// Usage direction modifier (`in`, `out`, `inout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// Element visibility within its owning scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

/// A metadata usage attached to an element, either as a prefix
/// (`#Metadata part p;`) or a body member (`part p { metadata Metadata; }`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataUsage {
    pub metadata_type: IStr,
    pub is_prefix: bool,
}

/// The handful of body-statement shapes the modifier needs to merge —
/// control-flow, connector, and state-behavior items are opaque payloads
/// here; the grammar that produces their structured form lives in the
/// external parser, out of this crate's scope (spec.md §1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyStatementKind {
    ControlFlow,
    Connector,
    StateBehavior,
    /// A shorthand feature re-declaration inside a usage body — the kind
    /// the merge transform's union-merge rule (spec.md §4.F step 6) keys
    /// on by `feature_name`.
    ShorthandFeature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyStatement {
    pub kind: BodyStatementKind,
    /// Set for `ShorthandFeature` statements; the name the merge pass
    /// matches fragment statements against original statements by.
    pub feature_name: Option<IStr>,
    pub text: IStr,
}

/// A named or anonymous model node: a package, definition, usage,
/// parameter, comment, or textual representation (spec.md §3).
///
/// Elements are never mutated after the external parser emits them,
/// except by modifier transforms, which always produce fresh copies
/// (spec.md §3, "Lifecycle").
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: IStr,
    pub name: Option<IStr>,
    pub kind: ElementKind,
    pub parent_id: Option<IStr>,
    pub range: SourceRange,

    pub typed_by: Vec<IStr>,
    pub specializes: Vec<IStr>,
    pub redefines: Vec<IStr>,
    pub references: Vec<IStr>,

    pub multiplicity_lower: Option<IStr>,
    pub multiplicity_upper: Option<IStr>,
    pub default_value: Option<IStr>,

    pub is_abstract: bool,
    pub is_variation: bool,
    pub is_readonly: bool,
    pub is_derived: bool,
    pub is_ref: bool,
    /// Set on a `Package` declared with the `library` modifier. Pass 1
    /// (spec.md §4.D) synthesizes an implicit namespace-wildcard import at
    /// the root scope for every such package, so its names resolve
    /// globally without an explicit `import`.
    pub is_library: bool,

    pub direction: Option<Direction>,
    pub visibility: Visibility,
    pub documentation: Option<IStr>,
    pub metadata: Vec<MetadataUsage>,
    pub body: Vec<BodyStatement>,
}

impl Element {
    pub fn new(id: IStr, kind: ElementKind, range: SourceRange) -> Self {
        Self {
            id,
            name: None,
            kind,
            parent_id: None,
            range,
            typed_by: Vec::new(),
            specializes: Vec::new(),
            redefines: Vec::new(),
            references: Vec::new(),
            multiplicity_lower: None,
            multiplicity_upper: None,
            default_value: None,
            is_abstract: false,
            is_variation: false,
            is_readonly: false,
            is_derived: false,
            is_ref: false,
            is_library: false,
            direction: None,
            visibility: Visibility::default(),
            documentation: None,
            metadata: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn is_package(&self) -> bool {
        self.kind.is_package()
    }

    pub fn is_definition(&self) -> bool {
        self.kind.is_definition()
    }

    pub fn is_usage(&self) -> bool {
        self.kind.is_usage()
    }

    /// All outgoing type-reference edges in one iterator — the union the
    /// cycle detector (Pass 3) and the redefinition inheritance walk
    /// (Pass 5) both need (spec.md §4.D, Pass 3 explicitly excludes
    /// `redefines`).
    pub fn type_edges(&self) -> impl Iterator<Item = &IStr> {
        self.typed_by
            .iter()
            .chain(self.specializes.iter())
            .chain(self.references.iter())
    }

    /// `typed_by` ∪ `specializes`, the closure Pass 5 narrows redefined
    /// types against.
    pub fn supertype_edges(&self) -> impl Iterator<Item = &IStr> {
        self.typed_by.iter().chain(self.specializes.iter())
    }
}
