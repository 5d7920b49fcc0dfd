/// Stable, user-facing diagnostic codes (spec.md §4.D, §8). Each variant's
/// `Display` is the exact code string a writer or test asserts against —
/// renumbering a pass must not renumber its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Pass 2: a `typed_by`/`specializes`/`references` edge names a
    /// qualified id that does not resolve.
    E3001UndefinedReference,
    /// Pass 5: a `redefines` edge names a feature that does not exist in
    /// the inheritance chain of the enclosing type.
    E3002UndefinedFeature,
    /// Pass 6: an import's target namespace or element does not resolve.
    E3003UnresolvedImport,
    /// Pass 1: two symbols bind the same name in the same scope (package
    /// merge is the sole exception, spec.md §9).
    E3004DuplicateDefinition,
    /// Pass 3: a `typed_by`/`specializes`/`references` cycle, excluding
    /// `redefines` edges, within the depth cap.
    E3005CircularSpecialization,
    /// Pass 2: a reference resolves, but the target's `ElementKind` is not
    /// in the accepting `Usage` kind's compatibility table.
    E3006TypeMismatch,
    /// Pass 4: a multiplicity bound's literal text does not parse as a
    /// non-negative integer (or `*` for the upper bound), or its lower
    /// bound exceeds its upper bound.
    E3007Multiplicity,
    /// Pass 5: a `redefines` edge resolves to a real feature but narrows
    /// neither its type nor its multiplicity.
    E3008RedefinitionError,
    /// Pass 7: an abstract definition is instantiated directly by a usage
    /// that does not itself redeclare it as abstract.
    W1003AbstractInstantiation,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        use DiagnosticCode::*;
        match self {
            E3001UndefinedReference => "E3001",
            E3002UndefinedFeature => "E3002",
            E3003UnresolvedImport => "E3003",
            E3004DuplicateDefinition => "E3004",
            E3005CircularSpecialization => "E3005",
            E3006TypeMismatch => "E3006",
            E3007Multiplicity => "E3007",
            E3008RedefinitionError => "E3008",
            W1003AbstractInstantiation => "W1003",
        }
    }

    /// The severity a code always carries — codes are never emitted at a
    /// different severity than this (spec.md §4.D).
    pub fn default_severity(self) -> super::Severity {
        match self {
            DiagnosticCode::W1003AbstractInstantiation => super::Severity::Warning,
            _ => super::Severity::Error,
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
