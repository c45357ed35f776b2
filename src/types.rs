//! Core types for checkout-merge

use std::path::PathBuf;

/// What the user asked for on the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkflowInput {
    /// Branch that receives the merge (checked out first)
    pub target_branch: String,
    /// Branch to merge from; `None` means the currently checked-out branch
    pub source_branch: Option<String>,
    /// Repository root to run in; `None` means the current directory
    pub repo_path: Option<PathBuf>,
}

impl WorkflowInput {
    /// Create input for merging into `target_branch` from the current branch
    pub fn new(target_branch: impl Into<String>) -> Self {
        Self {
            target_branch: target_branch.into(),
            source_branch: None,
            repo_path: None,
        }
    }

    /// Set an explicit source branch
    #[must_use]
    pub fn with_source(mut self, source_branch: impl Into<String>) -> Self {
        self.source_branch = Some(source_branch.into());
        self
    }
}

/// Captured result of one external command invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Process exit code (`-1` if terminated by a signal)
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status 0
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Text to show when the command failed: stderr, or stdout if stderr is empty
    pub fn failure_text(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// How a workflow run ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The user declined the merge; nothing was run
    Cancelled,
    /// Checkout and merge succeeded
    Completed {
        /// Branch that was merged in
        source: String,
        /// Branch that received the merge
        target: String,
        /// Whether the source branch was deleted afterward
        branch_deleted: bool,
    },
}

impl MergeOutcome {
    /// Whether the merge actually happened
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
