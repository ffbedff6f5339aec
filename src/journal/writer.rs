//! Log file writer

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::JournalError;
use crate::config::JournalConfig;
use crate::model::{CommitInfo, LogEntry, TagSet};

/// Rule line placed between entries when appending
const ENTRY_SEPARATOR: &str = "\n---\n\n";

/// What to do when today's log file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Replace the file with the latest entry
    #[default]
    Overwrite,
    /// Keep earlier entries and add the new one after a `---` rule
    Append,
}

/// Writes rendered entries into the log directory
#[derive(Debug)]
pub struct LogWriter<'a> {
    config: &'a JournalConfig,
}

impl<'a> LogWriter<'a> {
    pub fn new(config: &'a JournalConfig) -> Self {
        Self { config }
    }

    /// Render and write the entry for `date`, returning the log file path
    pub fn write_log(
        &self,
        date: NaiveDate,
        commit: &CommitInfo,
        tags: &TagSet,
    ) -> Result<PathBuf, JournalError> {
        let entry = LogEntry::new(date, commit.clone(), tags.clone());
        self.write_entry(&entry)
    }

    pub fn write_entry(&self, entry: &LogEntry) -> Result<PathBuf, JournalError> {
        let dir = self.config.log_dir_path();
        fs::create_dir_all(&dir).map_err(|source| JournalError::CreateLogDir {
            path: dir.clone(),
            source,
        })?;

        let path = self.config.log_path(entry.date);
        let rendered = entry.render();

        let result = match self.config.write_policy {
            WritePolicy::Overwrite => fs::write(&path, rendered),
            WritePolicy::Append => append_entry(&path, &rendered),
        };
        result.map_err(|source| JournalError::WriteLog {
            path: path.clone(),
            source,
        })?;

        tracing::info!("log file written: {}", path.display());
        Ok(path)
    }
}

fn append_entry(path: &Path, rendered: &str) -> io::Result<()> {
    let existing = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if !existing.is_empty() {
        if existing.last() != Some(&b'\n') {
            file.write_all(b"\n")?;
        }
        file.write_all(ENTRY_SEPARATOR.as_bytes())?;
    }
    file.write_all(rendered.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn commit(message: &str, files: &[&str]) -> CommitInfo {
        CommitInfo {
            message: Some(message.to_string()),
            changed_files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_creates_log_dir_and_file() {
        let dir = tempdir().unwrap();
        let config = JournalConfig::new(dir.path());
        let tags: TagSet = [Tag::Documentation, Tag::Bugfix].into_iter().collect();

        let path = LogWriter::new(&config)
            .write_log(date(), &commit("fix README typo", &["README.md"]), &tags)
            .unwrap();

        assert_eq!(path, dir.path().join("logs").join("log_2024-01-15.md"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("**Tags**: documentation bugfix"));
        assert!(content.contains("- README.md"));
    }

    #[test]
    fn test_existing_log_dir_is_fine() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("logs")).unwrap();
        let config = JournalConfig::new(dir.path());

        let result = LogWriter::new(&config).write_log(date(), &CommitInfo::default(), &TagSet::new());
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_files_placeholder() {
        let dir = tempdir().unwrap();
        let config = JournalConfig::new(dir.path());

        let path = LogWriter::new(&config)
            .write_log(date(), &commit("Empty", &[]), &TagSet::new())
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("no files changed"));
        assert!(content.contains("**Tags**: none"));
    }

    #[test]
    fn test_overwrite_policy_keeps_latest_only() {
        let dir = tempdir().unwrap();
        let config = JournalConfig::new(dir.path());
        let writer = LogWriter::new(&config);

        writer.write_log(date(), &commit("first", &[]), &TagSet::new()).unwrap();
        let path = writer.write_log(date(), &commit("second", &[]), &TagSet::new()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("first"));
        assert!(content.contains("**Commit message**: second"));
        assert_eq!(content.matches("# 2024-01-15 Commit Log").count(), 1);
    }

    #[test]
    fn test_append_policy_keeps_both_entries() {
        let dir = tempdir().unwrap();
        let config = JournalConfig::new(dir.path()).with_write_policy(WritePolicy::Append);
        let writer = LogWriter::new(&config);

        writer.write_log(date(), &commit("first", &[]), &TagSet::new()).unwrap();
        let path = writer.write_log(date(), &commit("second", &[]), &TagSet::new()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let first = content.find("**Commit message**: first").unwrap();
        let rule = content.find("\n---\n").unwrap();
        let second = content.find("**Commit message**: second").unwrap();
        assert!(first < rule && rule < second);
        assert_eq!(content.matches("# 2024-01-15 Commit Log").count(), 2);
    }

    #[test]
    fn test_append_policy_first_write_has_no_rule() {
        let dir = tempdir().unwrap();
        let config = JournalConfig::new(dir.path()).with_write_policy(WritePolicy::Append);

        let path = LogWriter::new(&config)
            .write_log(date(), &commit("only", &[]), &TagSet::new())
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# 2024-01-15 Commit Log"));
        assert!(!content.contains("---"));
    }

    #[test]
    fn test_log_dir_blocked_by_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logs"), "not a directory").unwrap();
        let config = JournalConfig::new(dir.path());

        let result = LogWriter::new(&config).write_log(date(), &CommitInfo::default(), &TagSet::new());
        let err = result.unwrap_err();
        assert!(matches!(err, JournalError::CreateLogDir { .. }));
        assert!(!err.recoverability().is_recoverable());
    }
}
