//! Commit data model

/// Metadata of the latest commit, as read from git
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitInfo {
    /// Full commit message (None when git could not be read)
    pub message: Option<String>,

    /// Paths touched by the commit, in git's order
    pub changed_files: Vec<String>,
}

impl CommitInfo {
    /// Placeholder shown when the message could not be read
    pub const NO_MESSAGE: &'static str = "(no commit message)";

    /// Get a display string for the message
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::NO_MESSAGE)
    }
}
