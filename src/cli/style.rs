//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips the escape codes when the
//! stream is not a terminal, so styled strings are safe to print anywhere.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark used for completed steps
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize {
    /// De-emphasized secondary text
    fn muted(&self) -> String;
    /// Bold text for headings and key words
    fn emphasis(&self) -> String;
    /// Highlight for names such as branches
    fn accent(&self) -> String;
    /// Successful outcome
    fn success(&self) -> String;
    /// Failure
    fn error(&self) -> String;
}

impl<T: Display + ?Sized> Stylize for T {
    fn muted(&self) -> String {
        OwoColorize::dimmed(&self).to_string()
    }

    fn emphasis(&self) -> String {
        OwoColorize::bold(&self).to_string()
    }

    fn accent(&self) -> String {
        OwoColorize::cyan(&self).to_string()
    }

    fn success(&self) -> String {
        OwoColorize::green(&self).to_string()
    }

    fn error(&self) -> String {
        OwoColorize::bold(&OwoColorize::red(&self)).to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}
