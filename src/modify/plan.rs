use crate::error::CoreResult;
use crate::interner::Interner;
use crate::model::SemanticModel;
use crate::query::Pattern;

use super::delete::delete_matching;
use super::merge::{merge_fragment, MergeReport};

/// One step of a [`Plan`] (spec.md §6 "Modifier plan format").
pub enum Operation {
    Delete(Pattern),
    Set {
        fragment: SemanticModel,
        target_scope: String,
        create_scope: bool,
    },
}

/// An ordered sequence of modifier operations, with an optional dry run
/// (spec.md §4.F, §6): applied in order, each operation sees the result
/// of the ones before it.
pub struct Plan {
    pub operations: Vec<Operation>,
    pub dry_run: bool,
}

impl Plan {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
        }
    }

    pub fn delete(mut self, pattern: Pattern) -> Self {
        self.operations.push(Operation::Delete(pattern));
        self
    }

    pub fn set(mut self, fragment: SemanticModel, target_scope: impl Into<String>, create_scope: bool) -> Self {
        self.operations.push(Operation::Set {
            fragment,
            target_scope: target_scope.into(),
            create_scope,
        });
        self
    }
}

/// Running totals across every operation in a [`Plan`] (spec.md §4.F
/// "Reporting", extended to a whole plan rather than one transform).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOutcome {
    pub deleted: usize,
    pub added: usize,
    pub replaced: usize,
}

/// Run every operation in `plan` against `base`, in order. When
/// `plan.dry_run` is set, the returned model is `base` unchanged — the
/// operations still run against an internal working copy so the reported
/// counts reflect what *would* have happened, including later operations
/// that depend on earlier ones.
pub fn apply(base: &SemanticModel, plan: &Plan, interner: &mut Interner) -> CoreResult<(SemanticModel, PlanOutcome)> {
    let mut working = base.clone();
    let mut outcome = PlanOutcome::default();

    for operation in &plan.operations {
        match operation {
            Operation::Delete(pattern) => {
                let (next, deleted) = delete_matching(&working, pattern);
                outcome.deleted += deleted;
                working = next;
            }
            Operation::Set {
                fragment,
                target_scope,
                create_scope,
            } => {
                let (next, report): (SemanticModel, MergeReport) = merge_fragment(&working, fragment, target_scope, *create_scope, interner)?;
                outcome.added += report.added;
                outcome.replaced += report.replaced;
                working = next;
            }
        }
    }

    if plan.dry_run {
        Ok((base.clone(), outcome))
    } else {
        Ok((working, outcome))
    }
}
