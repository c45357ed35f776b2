//! checkout-merge: check out a branch, merge another into it, and optionally
//! delete the merged branch.
//!
//! The library holds everything except argument parsing and terminal
//! rendering, which live in the binary's `cli` module.

pub mod config;
pub mod error;
pub mod git;
pub mod merge;
pub mod prompt;
pub mod types;
