/// Flat record of which of the seven passes run and how many "did you
/// mean?" suggestions each emits (spec.md §4.D, §6). This is the entire
/// configuration surface the validator owns — reading a value in from a
/// config file or CLI flag is the out-of-scope driver's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    pub check_duplicates: bool,
    /// Gates `E3001` (Pass 2's `typed_by` resolution).
    pub check_undefined_types: bool,
    /// Gates `E3006` (Pass 2's compatibility-table check), independent of
    /// `check_undefined_types` (spec.md §6).
    pub check_type_compatibility: bool,
    pub check_circular_specialization: bool,
    pub check_multiplicity: bool,
    /// Gates `E3002` (Pass 5's redefined-feature lookup).
    pub check_undefined_features: bool,
    /// Gates `E3008` (Pass 5's narrowing check), independent of
    /// `check_undefined_features` (spec.md §6).
    pub check_redefinition_compat: bool,
    pub check_imports: bool,
    pub warn_abstract_instantiation: bool,
    pub suggest_corrections: bool,
    pub max_suggestions: usize,
    /// Depth cap for Pass 3's cycle walk and Pass 5's inheritance walk
    /// (spec.md §4.D names both explicitly as depth-limited).
    pub max_walk_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_duplicates: true,
            check_undefined_types: true,
            check_type_compatibility: true,
            check_circular_specialization: true,
            check_multiplicity: true,
            check_undefined_features: true,
            check_redefinition_compat: true,
            check_imports: true,
            warn_abstract_instantiation: true,
            suggest_corrections: true,
            max_suggestions: 5,
            max_walk_depth: 20,
        }
    }
}
