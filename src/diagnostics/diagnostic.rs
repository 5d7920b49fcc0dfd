use crate::base::SourceRange;
use crate::interner::IStr;

use super::code::DiagnosticCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

/// A location-bearing annotation attached to a diagnostic — "see also"
/// (`Note`) or "try this instead" (`Help`), spec.md §4.G.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub severity: Severity,
    pub message: String,
    pub range: Option<SourceRange>,
}

/// A single validator finding: a stable [`DiagnosticCode`], the primary
/// location, a human-readable message, and zero or more notes/help hints
/// (spec.md §4.D, §4.G).
///
/// Built with `create` then extended with `add_note`/`add_help`, matching
/// the teacher's `Diagnostic::error(..).with_span(..).with_related(..)`
/// builder shape (`hir::diagnostics::Diagnostic`).
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub range: SourceRange,
    pub message: String,
    pub annotations: Vec<Annotation>,
}

impl Diagnostic {
    pub fn create(code: DiagnosticCode, range: SourceRange, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.default_severity(),
            range,
            message: message.into(),
            annotations: Vec::new(),
        }
    }

    pub fn add_note(mut self, message: impl Into<String>, range: Option<SourceRange>) -> Self {
        self.annotations.push(Annotation {
            severity: Severity::Note,
            message: message.into(),
            range,
        });
        self
    }

    pub fn add_help(mut self, message: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            severity: Severity::Help,
            message: message.into(),
            range: None,
        });
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Convenience constructor for the one suggestion shape every pass with
/// `suggest_corrections` enabled produces: "did you mean one of: a, b, c?"
/// (spec.md §4.C `find_similar`, §4.D).
pub fn suggestion_help(candidates: &[IStr]) -> Option<String> {
    if candidates.is_empty() {
        return None;
    }
    let names: Vec<&str> = candidates.iter().map(|c| &**c).collect();
    Some(format!("did you mean: {}?", names.join(", ")))
}
