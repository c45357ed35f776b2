//! Mock git runner for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use checkout_merge::error::{Error, Result};
use checkout_merge::git::GitRunner;
use checkout_merge::types::CommandOutput;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// Simple mock git runner
///
/// Features:
/// - Configurable current branch for `rev-parse`
/// - Call tracking for verification
/// - Per-subcommand failure injection
/// - Spawn failure injection
pub struct MockGit {
    current_branch: Mutex<String>,
    // Call tracking
    calls: Mutex<Vec<Vec<String>>>,
    // Error injection, keyed by subcommand ("checkout", "merge", ...)
    failures: Mutex<HashMap<String, CommandOutput>>,
    spawn_error: Mutex<Option<String>>,
}

impl Default for MockGit {
    fn default() -> Self {
        Self::on_branch("feature")
    }
}

impl MockGit {
    /// Create a mock whose current branch is `branch`
    pub fn on_branch(branch: &str) -> Self {
        Self {
            current_branch: Mutex::new(branch.to_string()),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            spawn_error: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `subcommand` exit with status 1 and the given stderr
    pub fn fail(&self, subcommand: &str, stderr: &str) {
        self.fail_with(
            subcommand,
            CommandOutput {
                exit_code: 1,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
    }

    /// Make `subcommand` return exactly `output`
    pub fn fail_with(&self, subcommand: &str, output: CommandOutput) {
        self.failures
            .lock()
            .unwrap()
            .insert(subcommand.to_string(), output);
    }

    /// Make every invocation fail to spawn
    pub fn fail_spawn(&self, msg: &str) {
        *self.spawn_error.lock().unwrap() = Some(msg.to_string());
    }

    // === Call inspection ===

    /// All invocations, each joined with spaces
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|args| args.join(" "))
            .collect()
    }

    /// Invocations that can change the repository (everything but `rev-parse`)
    pub fn mutating_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| !call.starts_with("rev-parse"))
            .collect()
    }

    /// Whether any invocation used `subcommand`
    pub fn was_called(&self, subcommand: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|args| args.first().is_some_and(|a| a == subcommand))
    }
}

impl GitRunner for MockGit {
    fn output(&self, args: &[&str]) -> Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| (*a).to_string()).collect());

        if let Some(msg) = self.spawn_error.lock().unwrap().clone() {
            return Err(Error::Spawn {
                program: "git".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, msg),
            });
        }

        let subcommand = args.first().copied().unwrap_or_default();
        if let Some(output) = self.failures.lock().unwrap().get(subcommand) {
            return Ok(output.clone());
        }

        let stdout = if subcommand == "rev-parse" {
            format!("{}\n", self.current_branch.lock().unwrap())
        } else {
            String::new()
        };

        Ok(CommandOutput {
            exit_code: 0,
            stdout,
            stderr: String::new(),
        })
    }
}
