//! The structural modifier (spec.md §4.F): pure delete and merge
//! transforms over a [`crate::model::SemanticModel`], plus the ordered
//! [`Plan`] that sequences them and the scope-listing helpers a driver
//! uses to build one interactively.

mod delete;
mod merge;
mod plan;
mod scopes;

pub use delete::delete_matching;
pub use merge::{merge_fragment, MergeReport};
pub use plan::{apply, Operation, Plan, PlanOutcome};
pub use scopes::{find_similar_scopes, list_scopes};
