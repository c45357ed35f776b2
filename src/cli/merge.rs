//! Merge command - check out, merge, optionally delete

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use checkout_merge::error::Result;
use checkout_merge::merge::MergeWorkflow;
use checkout_merge::prompt::LineConfirmer;
use checkout_merge::types::{MergeOutcome, WorkflowInput};
use std::io;

/// Run the merge command against the terminal
pub fn run_merge(input: &WorkflowInput) -> Result<MergeOutcome> {
    let ctx = CommandContext::new(input.repo_path.as_deref())?;
    tracing::info!(
        workdir = %ctx.workdir.display(),
        target = %input.target_branch,
        "starting merge"
    );

    let stdin = io::stdin();
    let mut confirmer = LineConfirmer::new(stdin.lock(), anstream::stdout());
    let progress = CliProgress;

    MergeWorkflow::new(&ctx.git, &mut confirmer, &progress)
        .skip_merge_confirm(ctx.config.skip_confirm)
        .run(input)
}
