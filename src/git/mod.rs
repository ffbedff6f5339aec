//! git command execution layer
//!
//! This module handles executing git commands and turning their output into
//! commit metadata.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;
mod reader;

pub use executor::GitExecutor;
pub use reader::{CommitSource, StaticCommit};

use std::io;
use thiserror::Error;

use crate::error::Recoverability;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

impl GitError {
    /// Every git failure degrades to empty commit data instead of aborting.
    pub fn recoverability(&self) -> Recoverability {
        Recoverability::Recoverable
    }
}
