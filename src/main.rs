//! checkout-merge - check out a branch, merge another into it, and
//! optionally delete the merged branch

mod cli;

use anstream::eprintln;
use checkout_merge::types::WorkflowInput;
use clap::{ArgAction, Parser};
use cli::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "checkout-merge",
    version,
    about = "Check out a branch, merge another branch into it, and optionally delete the merged branch"
)]
struct Cli {
    /// Branch to merge to
    merge_branch: String,

    /// Branch to merge from, default is current branch
    merge_from_branch: Option<String>,

    /// Git repository root directory, if not provided, defaults to current directory
    #[arg(short, long, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let input = WorkflowInput {
        target_branch: args.merge_branch,
        source_branch: args.merge_from_branch,
        repo_path: args.repo,
    };

    match cli::run_merge(&input) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".error());
            ExitCode::FAILURE
        }
    }
}
