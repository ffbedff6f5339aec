//! commit-journal - dated markdown journal entries from git commits
//!
//! Meant to run from a post-commit hook. Each run reads the latest commit,
//! tags it, writes `logs/log_<date>.md` and links that file from the README.
//!
//! This library provides:
//! - [`git`]: git command execution and output parsing
//! - [`classify`]: keyword tag rules
//! - [`journal`]: log file writer and index updater
//! - [`model`]: domain models
//! - [`pipeline`]: the end-to-end run

pub mod classify;
pub mod clock;
pub mod config;
pub mod error;
pub mod git;
pub mod journal;
pub mod model;
pub mod pipeline;

pub use config::JournalConfig;
pub use error::Recoverability;
pub use pipeline::{RunReport, run};
