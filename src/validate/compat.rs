use crate::model::ElementKind;

/// Whether a usage's `typed_by` edge may legally target an element of
/// `target_kind` (Pass 2, spec.md §4.D "Type resolution and compatibility
/// dispatch"). This is a literal transcription of spec.md's compatibility
/// table, which the spec calls out as authoritative.
pub fn accepts_type(usage_kind: ElementKind, target_kind: ElementKind) -> bool {
    use ElementKind::*;

    // any -> any package (packages are containers).
    if target_kind == Package {
        return true;
    }
    // any -> the generic KerML classifier/feature layer, or METADATA_DEF.
    if matches!(target_kind, Classifier | Feature | MetadataDef) {
        return true;
    }
    // any definition -> any definition (spec-to-spec specialization).
    if usage_kind.is_definition() && target_kind.is_definition() {
        return true;
    }
    // any definition if the usage is PARAMETER or REFERENCE_USAGE.
    if matches!(usage_kind, Parameter | ReferenceUsage) && target_kind.is_definition() {
        return true;
    }

    match usage_kind {
        PartUsage => matches!(target_kind, PartDef | ItemDef | OccurrenceDef),
        ActionUsage | PerformActionUsage => matches!(target_kind, ActionDef | CalcDef),
        StateUsage => matches!(target_kind, StateDef | ActionDef),
        PortUsage => matches!(target_kind, PortDef),
        AttributeUsage => matches!(target_kind, AttributeDef | EnumerationDef | Datatype),
        RequirementUsage => matches!(target_kind, RequirementDef | ConcernDef),
        ConstraintUsage => matches!(target_kind, ConstraintDef),
        ItemUsage => matches!(target_kind, ItemDef | PartDef | OccurrenceDef),
        OccurrenceUsage | EventUsage => matches!(target_kind, OccurrenceDef | ItemDef | PartDef),
        ConnectionUsage => matches!(target_kind, ConnectionDef | InterfaceDef),
        FlowUsage => matches!(target_kind, FlowDef),
        InterfaceUsage => matches!(target_kind, InterfaceDef),
        AllocationUsage => matches!(target_kind, AllocationDef),
        CalcUsage => matches!(target_kind, CalcDef | ActionDef),
        CaseUsage => matches!(target_kind, CaseDef | CalcDef),
        AnalysisUsage => matches!(target_kind, AnalysisCaseDef | CaseDef),
        VerificationUsage => matches!(target_kind, VerificationCaseDef | CaseDef),
        UseCaseUsage => matches!(target_kind, UseCaseDef | CaseDef),
        ViewUsage => matches!(target_kind, ViewDef),
        ViewpointUsage => matches!(target_kind, ViewpointDef),
        RenderingUsage => matches!(target_kind, RenderingDef),
        ConcernUsage => matches!(target_kind, ConcernDef | RequirementDef),
        MetadataUsage => matches!(target_kind, MetadataDef),
        _ => false,
    }
}
