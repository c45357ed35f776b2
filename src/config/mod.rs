//! Runtime configuration
//!
//! Defaults are overridden by the optional config file, which is in turn
//! overridden by environment variables.

mod storage;

pub use storage::{ConfigFile, GitSection, default_config_path, load_config_file};

use crate::error::Result;
use crate::prompt::{SKIP_CONFIRM_ENV, skip_confirm_from};
use std::path::PathBuf;

/// Git executable used when nothing else is configured
pub const DEFAULT_GIT_PROGRAM: &str = "/usr/bin/git";

/// Environment variable naming the git executable
pub const GIT_PROGRAM_ENV: &str = "CHECKOUTMERGE_GIT";

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "CHECKOUTMERGE_CONFIG";

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Git executable to spawn
    pub git_program: PathBuf,
    /// Skip the merge confirmation prompt
    pub skip_confirm: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_program: PathBuf::from(DEFAULT_GIT_PROGRAM),
            skip_confirm: false,
        }
    }
}

impl Config {
    /// Apply values from a parsed config file on top of the defaults
    pub fn from_file(file: &ConfigFile) -> Self {
        let mut config = Self::default();
        if let Some(program) = &file.git.program {
            config.git_program.clone_from(program);
        }
        config
    }

    /// Apply environment overrides; `lookup` returns a variable's value
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = lookup(GIT_PROGRAM_ENV).filter(|p| !p.trim().is_empty()) {
            self.git_program = PathBuf::from(program);
        }
        self.skip_confirm = skip_confirm_from(lookup(SKIP_CONFIRM_ENV).as_deref());
        self
    }

    /// Load the config file (if any) and apply environment overrides.
    ///
    /// The file location comes from `CHECKOUTMERGE_CONFIG`, falling back to
    /// [`default_config_path`].
    pub fn load<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);

        let file = match &path {
            Some(path) => load_config_file(path)?,
            None => ConfigFile::default(),
        };
        tracing::debug!(path = ?path, "loaded config");

        Ok(Self::from_file(&file).with_env(lookup))
    }
}
