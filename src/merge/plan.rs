//! Merge planning - pure state machine
//!
//! No I/O happens here. [`MergeState::next`] maps the current state and the
//! result of whatever the driver did in it to the following state.

use crate::error::{Error, Result};
use crate::types::WorkflowInput;

/// Where a workflow run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeState {
    /// Resolve the source branch if it was not given
    Init,
    /// Ask before touching the repository
    ConfirmMerge,
    /// `git checkout <target>`
    Checkout,
    /// `git merge <source>`
    Merge,
    /// Ask whether to delete the source branch
    ConfirmDelete,
    /// Ask again before the forced delete
    ConfirmDeleteFinal,
    /// `git branch -D <source>`
    Delete,
    /// Finished successfully
    Done,
    /// User declined the merge
    Cancelled,
    /// A step failed; the error is returned to the caller
    Fatal,
}

/// Result of the work done in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Step succeeded, or the user answered yes
    Proceed,
    /// The user answered anything but yes
    Decline,
    /// Step failed
    Failed,
}

/// Which confirmation a prompt state asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ask {
    /// Go ahead with checkout + merge
    Merge,
    /// Delete the source branch
    Delete,
    /// Second confirmation before the forced delete
    DeleteFinal,
}

/// The effect the driver performs in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Prompt the user
    Ask(Ask),
    /// `git checkout <target>`
    Checkout,
    /// `git merge <source>`
    Merge,
    /// `git branch -D <source>`
    DeleteBranch,
}

impl MergeState {
    /// Whether no further transition is possible
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled | Self::Fatal)
    }

    /// The effect to perform in this state.
    ///
    /// `None` for terminal states and for `Init`, which the driver leaves by
    /// resolving the source branch before any action runs.
    pub const fn action(self) -> Option<Action> {
        match self {
            Self::ConfirmMerge => Some(Action::Ask(Ask::Merge)),
            Self::Checkout => Some(Action::Checkout),
            Self::Merge => Some(Action::Merge),
            Self::ConfirmDelete => Some(Action::Ask(Ask::Delete)),
            Self::ConfirmDeleteFinal => Some(Action::Ask(Ask::DeleteFinal)),
            Self::Delete => Some(Action::DeleteBranch),
            Self::Init | Self::Done | Self::Cancelled | Self::Fatal => None,
        }
    }

    /// Next state after `signal`.
    ///
    /// `skip_merge_confirm` only affects the step out of `Init`.
    #[must_use]
    pub const fn next(self, signal: Signal, skip_merge_confirm: bool) -> Self {
        match (self, signal) {
            (Self::Done | Self::Cancelled | Self::Fatal, _) => self,
            (_, Signal::Failed) => Self::Fatal,

            (Self::Init, _) if skip_merge_confirm => Self::Checkout,
            (Self::Init, _) => Self::ConfirmMerge,

            (Self::ConfirmMerge, Signal::Proceed) => Self::Checkout,
            (Self::ConfirmMerge, Signal::Decline) => Self::Cancelled,

            (Self::Checkout, Signal::Proceed) => Self::Merge,
            (Self::Merge, Signal::Proceed) => Self::ConfirmDelete,

            (Self::ConfirmDelete, Signal::Proceed) => Self::ConfirmDeleteFinal,
            (Self::ConfirmDelete | Self::ConfirmDeleteFinal, Signal::Decline) => Self::Done,
            (Self::ConfirmDeleteFinal, Signal::Proceed) => Self::Delete,

            (Self::Delete, Signal::Proceed) => Self::Done,

            // Command steps never decline
            (Self::Checkout | Self::Merge | Self::Delete, Signal::Decline) => Self::Fatal,
        }
    }
}

/// Validated branch pair a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    /// Branch that is checked out and receives the merge
    pub target: String,
    /// Branch that is merged in and possibly deleted
    pub source: String,
}

/// Build a plan from the input and the resolved source branch.
///
/// Both names must be non-empty after trimming.
pub fn create_merge_plan(input: &WorkflowInput, source: &str) -> Result<MergePlan> {
    let target = input.target_branch.trim();
    if target.is_empty() {
        return Err(Error::InvalidInput(
            "branch to merge to must not be empty".to_string(),
        ));
    }
    let source = source.trim();
    if source.is_empty() {
        return Err(Error::InvalidInput(
            "branch to merge from must not be empty".to_string(),
        ));
    }

    Ok(MergePlan {
        target: target.to_string(),
        source: source.to_string(),
    })
}
