//! Commit reader
//!
//! Reads the latest commit through a [`CommitSource`]. Failures never escape:
//! a broken git call yields an absent message or an empty file list.

use crate::model::CommitInfo;

use super::GitExecutor;
use super::parser;

/// Source of the latest commit's metadata
pub trait CommitSource {
    /// Full message of the latest commit, or `None` if it could not be read
    fn latest_commit_message(&self) -> Option<String>;

    /// Paths changed between the latest commit and its parent
    fn changed_files(&self) -> Vec<String>;

    /// Read both halves into a [`CommitInfo`]
    fn read_commit(&self) -> CommitInfo {
        CommitInfo {
            message: self.latest_commit_message(),
            changed_files: self.changed_files(),
        }
    }
}

impl CommitSource for GitExecutor {
    fn latest_commit_message(&self) -> Option<String> {
        match self.last_message_raw() {
            Ok(output) => parser::parse_message(&output),
            Err(e) => {
                tracing::warn!(
                    recoverability = ?e.recoverability(),
                    "could not read latest commit message: {}",
                    e
                );
                None
            }
        }
    }

    fn changed_files(&self) -> Vec<String> {
        match self.changed_names_raw() {
            Ok(output) => parser::parse_changed_files(&output),
            Err(e) => {
                tracing::warn!(
                    recoverability = ?e.recoverability(),
                    "could not list changed files: {}",
                    e
                );
                Vec::new()
            }
        }
    }
}

/// Fixed commit data, for hooks that already know the commit or for tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCommit {
    pub message: Option<String>,
    pub changed_files: Vec<String>,
}

impl StaticCommit {
    pub fn new(message: Option<&str>, changed_files: &[&str]) -> Self {
        Self {
            message: message.map(str::to_string),
            changed_files: changed_files.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl CommitSource for StaticCommit {
    fn latest_commit_message(&self) -> Option<String> {
        self.message.clone()
    }

    fn changed_files(&self) -> Vec<String> {
        self.changed_files.clone()
    }
}
