//! Subprocess-backed [`GitRunner`]

use super::GitRunner;
use crate::error::{Error, Result};
use crate::types::CommandOutput;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::trace;

/// Runs the real git executable
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    workdir: PathBuf,
}

impl GitCli {
    /// Create a runner for `program` executing in `workdir`
    pub fn new(program: impl Into<PathBuf>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    /// Git executable this runner spawns
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Directory git runs in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl GitRunner for GitCli {
    fn output(&self, args: &[&str]) -> Result<CommandOutput> {
        trace!(program = %self.program.display(), ?args, "spawning");

        // stdin is closed so git never waits on the terminal we prompt on
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
