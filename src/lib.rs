//! # sysml-semantic-core
//!
//! Semantic-analysis core for a SysML v2 / KerML toolchain: string
//! interning, a scoped symbol table with import resolution, a seven-pass
//! validator, a qualified-id query engine, and a pure-functional
//! structural modifier (delete / merge). The lexer, grammar parser,
//! file/stdin I/O, CLI driver, and JSON/pretty-print writers are external
//! collaborators — this crate defines the contracts they consume and
//! produce, not the I/O around them.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! modify    → pure delete/merge transforms over a SemanticModel
//!   ↓
//! validate  → the seven-pass validator
//! query     → qualified-id pattern matching, used by the modifier
//!   ↓
//! symtab    → scoped symbol table, import resolution
//! diagnostics → stable-coded diagnostics and the sink the validator emits to
//!   ↓
//! model     → the flat SemanticModel contract (Element, Relationship, …)
//!   ↓
//! interner, qualified_id, similarity → string interning and id/name helpers
//!   ↓
//! arena, base, error → foundation types (bump allocator, FileId/SourceRange, CoreError)
//! ```

/// Foundation types: FileId, Position, SourceRange.
pub mod base;

/// Bump allocator with a stable `ArenaId<T>` handle.
pub mod arena;

/// Crate-level error type for out-of-memory and invalid-argument conditions.
pub mod error;

/// String interner: `Rc<str>` deduplication over FNV-1a hashing.
pub mod interner;

/// Qualified-id structural helpers (`segments`, `last_segment`, `join`, …).
pub mod qualified_id;

/// Levenshtein edit distance and the suggestion-distance threshold.
pub mod similarity;

/// The flat semantic model contract produced by an external parser.
pub mod model;

/// Stable-coded diagnostics and the sink the validator emits to.
pub mod diagnostics;

/// The scoped symbol table: scope tree, import resolution, fuzzy lookup.
pub mod symtab;

/// The seven-pass semantic validator.
pub mod validate;

/// Qualified-id pattern matching for the modifier.
pub mod query;

/// The structural modifier: pure delete/merge transforms and plans.
pub mod modify;

pub use arena::{Arena, ArenaId};
pub use error::{CoreError, CoreResult};
pub use interner::{IStr, Interner};
