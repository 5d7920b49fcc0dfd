//! Crate-level error type for the conditions spec.md §7 calls
//! out-of-memory and invalid-argument — the two kinds that genuinely
//! short-circuit instead of being latched as diagnostics.
//!
//! Semantic-rule violations are never represented here: they are emitted
//! to a [`crate::diagnostics::DiagnosticSink`] during validation, and the
//! top-level `validate` call reports them via
//! [`crate::validate::ValidationOutcome`], not `Result`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The arena could not satisfy an allocation request.
    #[error("arena exhausted: {0}")]
    OutOfMemory(String),

    /// A required argument was null, empty, or otherwise malformed —
    /// never a semantic-rule violation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A merge's `target_scope` does not exist in the base model and
    /// `create_scope` was not set.
    #[error("scope not found: {0}")]
    NotFound(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
