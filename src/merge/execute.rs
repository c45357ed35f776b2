//! Merge execution - effectful operations
//!
//! [`MergeWorkflow`] walks the states from [`MergeState`], performing the
//! git call or prompt that belongs to each one. The first failure stops the
//! run; nothing already done is undone.

use crate::error::{Error, Result};
use crate::git::GitRunner;
use crate::merge::plan::{Action, Ask, MergePlan, MergeState, Signal, create_merge_plan};
use crate::prompt::{Confirmer, Question};
use crate::types::{MergeOutcome, WorkflowInput};
use tracing::{debug, info};

/// Status change reported while a workflow runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    /// Merge is going ahead without a prompt
    MergeStarting {
        /// Branch being merged in
        source: String,
        /// Branch receiving the merge
        target: String,
    },
    /// The user declined the merge
    Cancelled,
    /// Target branch is checked out
    CheckedOut {
        /// Branch now checked out
        target: String,
    },
    /// Merge finished
    Merged {
        /// Branch merged in
        source: String,
        /// Branch that received it
        target: String,
    },
    /// Source branch was deleted
    BranchDeleted {
        /// Deleted branch
        branch: String,
    },
    /// Source branch was left in place
    BranchKept {
        /// Kept branch
        branch: String,
    },
}

/// Receives [`MergeEvent`]s as the workflow advances
pub trait ProgressCallback {
    /// Called once per event, in order
    fn on_event(&self, event: &MergeEvent);
}

/// [`ProgressCallback`] that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_event(&self, _event: &MergeEvent) {}
}

/// Checkout, merge, and optional delete of one branch pair
pub struct MergeWorkflow<'a> {
    git: &'a dyn GitRunner,
    confirmer: &'a mut dyn Confirmer,
    progress: &'a dyn ProgressCallback,
    skip_merge_confirm: bool,
}

impl<'a> MergeWorkflow<'a> {
    /// Create a workflow over the given git runner, confirmer and progress sink
    pub fn new(
        git: &'a dyn GitRunner,
        confirmer: &'a mut dyn Confirmer,
        progress: &'a dyn ProgressCallback,
    ) -> Self {
        Self {
            git,
            confirmer,
            progress,
            skip_merge_confirm: false,
        }
    }

    /// Bypass the merge confirmation (the delete confirmations still apply)
    #[must_use]
    pub const fn skip_merge_confirm(mut self, skip: bool) -> Self {
        self.skip_merge_confirm = skip;
        self
    }

    /// Source branch from the input, or the current branch when not given
    pub fn resolve_source_branch(&self, input: &WorkflowInput) -> Result<String> {
        match &input.source_branch {
            Some(branch) => Ok(branch.clone()),
            None => self.git.current_branch(),
        }
    }

    /// Run the workflow to a terminal state.
    ///
    /// Returns the first error encountered; by then every later step has
    /// been skipped.
    pub fn run(mut self, input: &WorkflowInput) -> Result<MergeOutcome> {
        // Init: nothing touches the repository until the plan is valid
        let plan = match self
            .resolve_source_branch(input)
            .and_then(|source| create_merge_plan(input, &source))
        {
            Ok(plan) => plan,
            Err(e) => return Err(self.fail(MergeState::Init, e)),
        };
        if self.skip_merge_confirm {
            self.progress.on_event(&MergeEvent::MergeStarting {
                source: plan.source.clone(),
                target: plan.target.clone(),
            });
        }

        let mut state = MergeState::Init.next(Signal::Proceed, self.skip_merge_confirm);
        let mut branch_deleted = false;

        while let Some(action) = state.action() {
            let signal = match self.step(action, &plan) {
                Ok(signal) => signal,
                Err(e) => return Err(self.fail(state, e)),
            };

            if action == Action::DeleteBranch && signal == Signal::Proceed {
                branch_deleted = true;
            }

            let next = state.next(signal, self.skip_merge_confirm);
            debug!(from = ?state, to = ?next, ?signal, "transition");
            state = next;
        }

        if state == MergeState::Cancelled {
            self.progress.on_event(&MergeEvent::Cancelled);
            return Ok(MergeOutcome::Cancelled);
        }

        if !branch_deleted {
            self.progress.on_event(&MergeEvent::BranchKept {
                branch: plan.source.clone(),
            });
        }
        info!(
            source = %plan.source,
            target = %plan.target,
            branch_deleted,
            "workflow complete"
        );
        Ok(MergeOutcome::Completed {
            source: plan.source,
            target: plan.target,
            branch_deleted,
        })
    }

    /// Move `state` to `Fatal` and hand back the error that caused it
    fn fail(&self, state: MergeState, error: Error) -> Error {
        let next = state.next(Signal::Failed, self.skip_merge_confirm);
        debug!(from = ?state, to = ?next, error = %error, "transition");
        error
    }

    /// Perform `action` and report how it went
    fn step(&mut self, action: Action, plan: &MergePlan) -> Result<Signal> {
        let signal = match action {
            Action::Ask(Ask::Merge) => self.ask(&Question::Merge {
                source: plan.source.clone(),
                target: plan.target.clone(),
            })?,
            Action::Checkout => {
                self.git.checkout(&plan.target)?;
                self.progress.on_event(&MergeEvent::CheckedOut {
                    target: plan.target.clone(),
                });
                Signal::Proceed
            }
            Action::Merge => {
                self.git.merge(&plan.source)?;
                self.progress.on_event(&MergeEvent::Merged {
                    source: plan.source.clone(),
                    target: plan.target.clone(),
                });
                Signal::Proceed
            }
            Action::Ask(Ask::Delete) => self.ask(&Question::DeleteBranch)?,
            Action::Ask(Ask::DeleteFinal) => self.ask(&Question::DeleteBranchFinal)?,
            Action::DeleteBranch => {
                self.git.delete_branch(&plan.source)?;
                self.progress.on_event(&MergeEvent::BranchDeleted {
                    branch: plan.source.clone(),
                });
                Signal::Proceed
            }
        };

        Ok(signal)
    }

    fn ask(&mut self, question: &Question) -> Result<Signal> {
        if self.confirmer.confirm(question)? {
            Ok(Signal::Proceed)
        } else {
            Ok(Signal::Decline)
        }
    }
}
