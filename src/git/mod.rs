//! Git invocation
//!
//! Everything the workflow needs from git goes through [`GitRunner`]. Only
//! [`GitRunner::output`] touches a process; the branch operations are
//! provided on top of it so a test double implements a single method.

mod process;

pub use process::GitCli;

use crate::error::{Error, Result};
use crate::types::CommandOutput;
use tracing::{debug, info, warn};

/// Runs git subcommands in a fixed working directory
pub trait GitRunner {
    /// Run git with `args` and capture its output.
    ///
    /// Returns `Ok` for any exit status; only failure to start the process
    /// is an error here.
    fn output(&self, args: &[&str]) -> Result<CommandOutput>;

    /// Run git with `args`, failing with [`Error::Command`] on a non-zero exit
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        info!(args = %args.join(" "), "running git");
        let output = self.output(args)?;
        if output.success() {
            Ok(output)
        } else {
            warn!(
                args = %args.join(" "),
                exit_code = output.exit_code,
                "git command failed"
            );
            Err(Error::command(args, output.failure_text()))
        }
    }

    /// Name of the currently checked-out branch
    fn current_branch(&self) -> Result<String> {
        let output = self.output(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        if !output.success() {
            return Err(Error::Resolution(output.failure_text().trim().to_string()));
        }
        let branch = parse_branch_name(&output.stdout)?;
        debug!(branch = %branch, "resolved current branch");
        Ok(branch)
    }

    /// `git checkout <branch>`
    fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch]).map(drop)
    }

    /// `git merge <branch>`
    fn merge(&self, branch: &str) -> Result<()> {
        self.run(&["merge", branch]).map(drop)
    }

    /// `git branch -D <branch>`
    fn delete_branch(&self, branch: &str) -> Result<()> {
        self.run(&["branch", "-D", branch]).map(drop)
    }
}

/// Extract the branch name from `rev-parse --abbrev-ref HEAD` output
pub fn parse_branch_name(stdout: &str) -> Result<String> {
    let name = stdout.trim();
    if name.is_empty() {
        return Err(Error::Resolution(
            "could not parse current branch name".to_string(),
        ));
    }
    // rev-parse prints the literal "HEAD" when nothing is checked out by name
    if name == "HEAD" {
        return Err(Error::Resolution(
            "HEAD is detached; pass the branch to merge from explicitly".to_string(),
        ));
    }
    Ok(name.to_string())
}
