//! Diagnostics: stable error codes, builder-style construction, and an
//! ordered collection sink (spec.md §4.G).

mod code;
mod diagnostic;
mod sink;

pub use code::DiagnosticCode;
pub use diagnostic::{suggestion_help, Annotation, Diagnostic, Severity};
pub use sink::DiagnosticSink;
