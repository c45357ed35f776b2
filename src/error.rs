//! Error types for checkout-merge

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a merge workflow
#[derive(Debug, Error)]
pub enum Error {
    /// The current branch could not be determined
    #[error("failed to get current branch: {0}")]
    Resolution(String),

    /// An external command exited with a non-zero status
    #[error("git command failed: git {args}\n{stderr}")]
    Command {
        /// Space-joined arguments of the failed invocation
        args: String,
        /// Captured standard error of the process
        stderr: String,
    },

    /// The external program could not be started at all
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was being spawned
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The `--repo` directory could not be entered
    #[error("cannot use repository path {}: {source}", path.display())]
    RepoPath {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Branch names or other input failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Config file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// Reading a confirmation answer failed
    #[error("failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `Command` error from the argument list and captured stderr
    pub fn command(args: &[&str], stderr: &str) -> Self {
        Self::Command {
            args: args.join(" "),
            stderr: stderr.trim_end().to_string(),
        }
    }
}
