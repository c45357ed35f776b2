//! CLI layer: context setup, terminal rendering, logging

pub mod context;
pub mod merge;
pub mod style;

pub use merge::run_merge;

use anstream::println;
use checkout_merge::merge::{MergeEvent, ProgressCallback};
use style::{Stylize, check};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "CHECKOUTMERGE_LOG";

/// Renders workflow events as terminal lines
pub struct CliProgress;

impl ProgressCallback for CliProgress {
    fn on_event(&self, event: &MergeEvent) {
        match event {
            MergeEvent::MergeStarting { source, target } => {
                println!(
                    "{} {} into {}...",
                    "Merging".emphasis(),
                    source.accent(),
                    target.accent()
                );
            }
            MergeEvent::Cancelled => println!("{}", "Merge cancelled.".muted()),
            MergeEvent::CheckedOut { target } => {
                println!("Checked out {}. Initiating merge...", target.accent());
            }
            MergeEvent::Merged { source, target } => {
                println!(
                    "{} Merged {} into {}",
                    check(),
                    source.accent(),
                    target.accent()
                );
            }
            MergeEvent::BranchDeleted { branch } => {
                println!("{} Deleted branch {}", check(), branch.accent());
            }
            MergeEvent::BranchKept { branch } => {
                println!("{}", format!("Kept branch {branch}").muted());
            }
        }
    }
}

/// Install the stderr log subscriber.
///
/// `CHECKOUTMERGE_LOG` wins over the `-v` count.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
