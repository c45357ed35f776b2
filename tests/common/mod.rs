//! Shared test utilities

#![allow(dead_code)]

mod mock_git;

pub use mock_git::MockGit;

use checkout_merge::error::Result;
use checkout_merge::merge::{MergeEvent, ProgressCallback};
use checkout_merge::prompt::{Confirmer, Question, is_yes};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

/// Confirmer that replays canned answers; running out means end of input
pub struct ScriptedConfirmer {
    answers: VecDeque<String>,
    asked: Vec<Question>,
}

impl ScriptedConfirmer {
    /// Answer questions with `answers`, in order
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, question: &Question) -> Result<bool> {
        self.asked.push(question.clone());
        Ok(self.answers.pop_front().is_some_and(|a| is_yes(&a)))
    }
}

/// Progress sink that records every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<MergeEvent>>,
}

impl RecordingProgress {
    /// Events received so far
    pub fn events(&self) -> Vec<MergeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressCallback for RecordingProgress {
    fn on_event(&self, event: &MergeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Temporary git repository with `main` and a `feature` branch checked out
pub struct TempGitRepo {
    dir: TempDir,
}

impl TempGitRepo {
    /// Repo whose `feature` branch adds `feature.txt` on top of `main`
    pub fn new() -> Self {
        let repo = Self::with_main();
        repo.git(&["checkout", "-b", "feature"]);
        repo.commit_file("feature.txt", "feature work\n", "Add feature");
        repo
    }

    /// Repo where `main` and `feature` both edit `README.md`
    pub fn conflicting() -> Self {
        let repo = Self::with_main();
        repo.git(&["checkout", "-b", "feature"]);
        repo.commit_file("README.md", "feature version\n", "Edit README on feature");
        repo.git(&["checkout", "main"]);
        repo.commit_file("README.md", "main version\n", "Edit README on main");
        repo.git(&["checkout", "feature"]);
        repo
    }

    fn with_main() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.commit_file("README.md", "initial\n", "Initial commit");
        repo
    }

    /// Repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the repo, panicking on failure; returns trimmed stdout
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("HOME", self.path())
            .output()
            .expect("run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Write `name` and commit it
    pub fn commit_file(&self, name: &str, content: &str, message: &str) {
        fs::write(self.path().join(name), content).expect("write file");
        self.git(&["add", name]);
        self.git(&["commit", "--quiet", "-m", message]);
    }

    /// Currently checked-out branch
    pub fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Whether a local branch exists
    pub fn branch_exists(&self, name: &str) -> bool {
        !self.git(&["branch", "--list", name]).is_empty()
    }

    /// Whether a file exists in the working tree
    pub fn has_file(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }
}
