//! Yes/no confirmation over line-based input

use crate::error::Result;
use std::fmt;
use std::io::{BufRead, Write};

/// Name of the environment variable that bypasses the merge confirmation
pub const SKIP_CONFIRM_ENV: &str = "CHECKOUTMERGE_SKIPCONFIRM";

/// A decision point in the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Go ahead with checkout + merge?
    Merge {
        /// Branch being merged in
        source: String,
        /// Branch receiving the merge
        target: String,
    },
    /// Delete the source branch now that it is merged?
    DeleteBranch,
    /// Second confirmation for the forced delete
    DeleteBranchFinal,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge { source, target } => {
                write!(f, "This will merge {source} into {target}. Continue? (y/n)")
            }
            Self::DeleteBranch => write!(f, "Merge completed. Delete original branch? (y/n)"),
            Self::DeleteBranchFinal => write!(f, "This is permanent. ARE YOU SURE?"),
        }
    }
}

impl Question {
    /// Extra line printed under the question, if any
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Merge { .. } => Some("Note: To disable this prompt, set CHECKOUTMERGE_SKIPCONFIRM = 1."),
            Self::DeleteBranch | Self::DeleteBranchFinal => None,
        }
    }
}

/// Asks the user a yes/no question
pub trait Confirmer {
    /// Ask `question`; `true` only for an explicit yes
    fn confirm(&mut self, question: &Question) -> Result<bool>;
}

/// Whether an answer counts as yes: `y` in any case, surrounding whitespace ignored
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Read one line from `input` and interpret it with [`is_yes`].
///
/// End of input is a no, and so is a line that is not valid UTF-8.
pub fn read_yes_no<R: BufRead>(input: &mut R) -> Result<bool> {
    let mut line = Vec::new();
    let read = input.read_until(b'\n', &mut line)?;
    Ok(read > 0 && is_yes(&String::from_utf8_lossy(&line)))
}

/// Whether the skip-confirm override is set to exactly `"1"`
pub fn skip_confirm_from(value: Option<&str>) -> bool {
    value == Some("1")
}

/// [`Confirmer`] that prints questions to a writer and reads answers line by line
pub struct LineConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    /// Create a confirmer over `input` and `output`
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self, question: &Question) -> Result<bool> {
        writeln!(self.output, "{question}")?;
        if let Some(hint) = question.hint() {
            writeln!(self.output, "{hint}")?;
        }
        self.output.flush()?;

        let answer = read_yes_no(&mut self.input)?;
        tracing::debug!(?question, answer, "confirmation answered");
        Ok(answer)
    }
}
