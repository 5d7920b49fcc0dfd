//! Qualified-id pattern matching (spec.md §4.F): the `*`/`**` grammar the
//! modifier's delete and merge transforms select elements with.

mod pattern;

pub use pattern::{matches_any, Pattern};

/// Re-exported for callers that only need structural path splitting
/// without compiling a full [`Pattern`] (spec.md §4.F `parent_path`).
pub use crate::qualified_id::parent_path;
