//! Shared command context for the CLI
//!
//! Performs the one-time process setup before the workflow runs.

use checkout_merge::config::Config;
use checkout_merge::error::{Error, Result};
use checkout_merge::git::GitCli;
use std::path::{Path, PathBuf};

/// Everything the merge command needs from the environment
///
/// This struct encapsulates:
/// - Entering the repository directory (at most once, here)
/// - Loading config and environment overrides
/// - Building the git runner bound to that directory
pub struct CommandContext {
    /// Directory git commands run in
    pub workdir: PathBuf,
    /// Effective configuration
    pub config: Config,
    /// Git runner for `workdir`
    pub git: GitCli,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// If `repo` is given the process changes into it first.
    pub fn new(repo: Option<&Path>) -> Result<Self> {
        if let Some(repo) = repo {
            std::env::set_current_dir(repo).map_err(|source| Error::RepoPath {
                path: repo.to_path_buf(),
                source,
            })?;
        }
        let workdir = std::env::current_dir().map_err(|source| Error::RepoPath {
            path: repo.map_or_else(|| PathBuf::from("."), Path::to_path_buf),
            source,
        })?;

        let config = Config::load(|key| std::env::var(key).ok())?;
        tracing::debug!(
            workdir = %workdir.display(),
            git = %config.git_program.display(),
            skip_confirm = config.skip_confirm,
            "command context ready"
        );

        let git = GitCli::new(&config.git_program, &workdir);

        Ok(Self {
            workdir,
            config,
            git,
        })
    }
}
