//! Checkout/merge/delete workflow
//!
//! Two-part pattern:
//! 1. Plan - `MergeState` transitions and `MergePlan` validation (pure, testable)
//! 2. Execute - `MergeWorkflow` performs git calls and prompts (effectful)

mod execute;
mod plan;

pub use execute::{MergeEvent, MergeWorkflow, NoProgress, ProgressCallback};
pub use plan::{Action, Ask, MergePlan, MergeState, Signal, create_merge_plan};
