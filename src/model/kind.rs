//! The flat `kind` tag every [`super::Element`] carries exactly one of
//! (spec.md §3, "Kind enumeration"), plus the five pure predicate
//! functions the spec requires be exposed over it.

/// One tag per element. SysML definitions/usages and the two generic KerML
/// constructs (`Classifier`, `Feature`) live side by side in one flat enum
/// rather than a type hierarchy, matching spec.md §9's "Polymorphism"
/// design note (a tagged variant plus predicates, not inheritance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Comment,
    TextualRepresentation,
    Parameter,
    ReferenceUsage,
    MetadataUsage,
    MetadataDef,

    /// Generic KerML type-like construct, used by models that never
    /// declare a SysML-specific `*Def` kind.
    Classifier,
    /// Generic KerML instance-like construct, the feature-layer analog of
    /// [`ElementKind::Classifier`].
    Feature,

    PartDef,
    ItemDef,
    OccurrenceDef,
    ActionDef,
    CalcDef,
    StateDef,
    PortDef,
    AttributeDef,
    EnumerationDef,
    Datatype,
    RequirementDef,
    ConcernDef,
    ConstraintDef,
    ConnectionDef,
    InterfaceDef,
    FlowDef,
    AllocationDef,
    CaseDef,
    AnalysisCaseDef,
    VerificationCaseDef,
    UseCaseDef,
    ViewDef,
    ViewpointDef,
    RenderingDef,

    PartUsage,
    ActionUsage,
    PerformActionUsage,
    StateUsage,
    PortUsage,
    AttributeUsage,
    RequirementUsage,
    ConstraintUsage,
    ItemUsage,
    OccurrenceUsage,
    EventUsage,
    ConnectionUsage,
    FlowUsage,
    InterfaceUsage,
    AllocationUsage,
    CalcUsage,
    CaseUsage,
    AnalysisUsage,
    VerificationUsage,
    UseCaseUsage,
    ViewUsage,
    ViewpointUsage,
    RenderingUsage,
    ConcernUsage,
}

impl ElementKind {
    pub fn is_package(self) -> bool {
        matches!(self, ElementKind::Package)
    }

    /// True for every `*Def` kind and the generic KerML `Classifier`.
    /// Per spec.md's glossary, "any SysML definition is a KerML
    /// classifier" — this crate models that as one predicate rather than
    /// a separate subtype check (see DESIGN.md).
    pub fn is_definition(self) -> bool {
        use ElementKind::*;
        matches!(
            self,
            Classifier
                | MetadataDef
                | PartDef
                | ItemDef
                | OccurrenceDef
                | ActionDef
                | CalcDef
                | StateDef
                | PortDef
                | AttributeDef
                | EnumerationDef
                | Datatype
                | RequirementDef
                | ConcernDef
                | ConstraintDef
                | ConnectionDef
                | InterfaceDef
                | FlowDef
                | AllocationDef
                | CaseDef
                | AnalysisCaseDef
                | VerificationCaseDef
                | UseCaseDef
                | ViewDef
                | ViewpointDef
                | RenderingDef
        )
    }

    /// True for every `*Usage` kind, `Parameter`, `ReferenceUsage`,
    /// `MetadataUsage`, and the generic KerML `Feature`.
    pub fn is_usage(self) -> bool {
        use ElementKind::*;
        matches!(
            self,
            Feature
                | Parameter
                | ReferenceUsage
                | MetadataUsage
                | PartUsage
                | ActionUsage
                | PerformActionUsage
                | StateUsage
                | PortUsage
                | AttributeUsage
                | RequirementUsage
                | ConstraintUsage
                | ItemUsage
                | OccurrenceUsage
                | EventUsage
                | ConnectionUsage
                | FlowUsage
                | InterfaceUsage
                | AllocationUsage
                | CalcUsage
                | CaseUsage
                | AnalysisUsage
                | VerificationUsage
                | UseCaseUsage
                | ViewUsage
                | ViewpointUsage
                | RenderingUsage
                | ConcernUsage
        )
    }

    /// Alias for [`Self::is_definition`] — every definition is, by
    /// construction, a KerML classifier (spec.md glossary).
    pub fn is_kerml_classifier(self) -> bool {
        self.is_definition()
    }

    /// Alias for [`Self::is_usage`] — every usage is a KerML feature.
    pub fn is_kerml_feature(self) -> bool {
        self.is_usage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_are_mutually_exclusive_for_package() {
        assert!(ElementKind::Package.is_package());
        assert!(!ElementKind::Package.is_definition());
        assert!(!ElementKind::Package.is_usage());
    }

    #[test]
    fn definition_kinds_are_kerml_classifiers() {
        assert!(ElementKind::PartDef.is_definition());
        assert!(ElementKind::PartDef.is_kerml_classifier());
        assert!(!ElementKind::PartDef.is_usage());
    }

    #[test]
    fn usage_kinds_are_kerml_features() {
        assert!(ElementKind::PartUsage.is_usage());
        assert!(ElementKind::PartUsage.is_kerml_feature());
        assert!(!ElementKind::PartUsage.is_definition());
    }

    #[test]
    fn generic_classifier_and_feature_are_the_raw_kerml_layer() {
        assert!(ElementKind::Classifier.is_kerml_classifier());
        assert!(ElementKind::Feature.is_kerml_feature());
    }
}
