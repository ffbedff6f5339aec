//! Journal entry model

use chrono::NaiveDate;

use super::{CommitInfo, TagSet};

/// Date format used in file names, headings and index links
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One dated journal record describing a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub commit: CommitInfo,
    pub tags: TagSet,
}

impl LogEntry {
    /// Line rendered in place of an empty file list
    pub const NO_FILES: &'static str = "no files changed";

    pub fn new(date: NaiveDate, commit: CommitInfo, tags: TagSet) -> Self {
        Self { date, commit, tags }
    }

    /// `log_<YYYY-MM-DD>.md`
    pub fn file_name(date: NaiveDate) -> String {
        format!("log_{}.md", date.format(DATE_FORMAT))
    }

    /// Render the entry as markdown
    pub fn render(&self) -> String {
        let files = if self.commit.changed_files.is_empty() {
            Self::NO_FILES.to_string()
        } else {
            self.commit
                .changed_files
                .iter()
                .map(|f| format!("- {}", f))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "# {} Commit Log\n\n**Commit message**: {}\n\n**Changed files**:\n{}\n\n**Tags**: {}\n",
            self.date.format(DATE_FORMAT),
            self.commit.display_message(),
            files,
            self.tags.display(),
        )
    }
}
