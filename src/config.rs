//! Journal configuration
//!
//! Where the journal lives and how it is written. There is no config file and
//! no command-line surface; the binary uses [`JournalConfig::new`] defaults
//! rooted at the working directory.

use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;
use pathdiff::diff_paths;

use crate::journal::WritePolicy;
use crate::model::LogEntry;

/// Default log directory, relative to the root
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default index document, relative to the root
pub const DEFAULT_INDEX_FILE: &str = "README.md";

/// Default heading that log links are collected under
pub const DEFAULT_SECTION_HEADING: &str = "## Commit Logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Project root; every other path is relative to it
    pub root: PathBuf,
    pub log_dir: PathBuf,
    pub index_file: PathBuf,
    /// Full heading line, including the leading `#`s
    pub section_heading: String,
    pub write_policy: WritePolicy,
}

impl JournalConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            section_heading: DEFAULT_SECTION_HEADING.to_string(),
            write_policy: WritePolicy::default(),
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn with_index_file(mut self, index_file: impl Into<PathBuf>) -> Self {
        self.index_file = index_file.into();
        self
    }

    pub fn with_section_heading(mut self, heading: impl Into<String>) -> Self {
        self.section_heading = heading.into();
        self
    }

    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    /// Absolute-ish path of the log directory
    pub fn log_dir_path(&self) -> PathBuf {
        self.root.join(&self.log_dir)
    }

    /// Path of the log file for `date`
    pub fn log_path(&self, date: NaiveDate) -> PathBuf {
        self.log_dir_path().join(LogEntry::file_name(date))
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.index_file)
    }

    /// Link target for `date` as written into the index
    ///
    /// Relative to the index document's directory and always `/`-separated.
    pub fn link_target(&self, date: NaiveDate) -> String {
        let log_path = self.log_path(date);
        let index_path = self.index_path();
        let index_dir = index_path.parent().unwrap_or(Path::new(""));
        let relative = diff_paths(&log_path, index_dir).unwrap_or(log_path);
        to_link_path(&relative)
    }
}

fn to_link_path(path: &Path) -> String {
    let mut link = String::new();
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => link.push_str(&p.as_os_str().to_string_lossy()),
            Component::RootDir => link.push('/'),
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
        }
    }
    link.push_str(&parts.join("/"));
    link
}
