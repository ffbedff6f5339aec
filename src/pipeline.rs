//! One journal run
//!
//! Commit reader → tag classifier → log writer → index updater, in that order.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::classify::classify;
use crate::clock::Clock;
use crate::config::JournalConfig;
use crate::git::CommitSource;
use crate::journal::{EncodingDetector, IndexUpdater, JournalError, LinkOutcome, LogWriter};
use crate::model::{CommitInfo, LogEntry, TagSet};

/// What a run produced
#[derive(Debug)]
pub struct RunReport {
    pub date: NaiveDate,
    pub commit: CommitInfo,
    pub tags: TagSet,
    pub log_path: PathBuf,
    pub link: LinkOutcome,
}

/// Run the pipeline with the default encoding detector
///
/// Only a failure to write the log file is returned as an error; git and
/// index problems are logged and show up as degraded data in the report.
pub fn run(
    config: &JournalConfig,
    source: &dyn CommitSource,
    clock: &dyn Clock,
) -> Result<RunReport, JournalError> {
    run_with(config, source, clock, IndexUpdater::new(config))
}

/// Same as [`run`] but decoding the index with `detector`
pub fn run_with_detector(
    config: &JournalConfig,
    source: &dyn CommitSource,
    clock: &dyn Clock,
    detector: &dyn EncodingDetector,
) -> Result<RunReport, JournalError> {
    run_with(
        config,
        source,
        clock,
        IndexUpdater::new(config).with_detector(detector),
    )
}

fn run_with(
    config: &JournalConfig,
    source: &dyn CommitSource,
    clock: &dyn Clock,
    updater: IndexUpdater<'_>,
) -> Result<RunReport, JournalError> {
    let date = clock.today();
    let commit = source.read_commit();
    tracing::debug!(
        has_message = commit.message.is_some(),
        files = commit.changed_files.len(),
        "commit read"
    );

    let tags = classify(commit.message.as_deref(), &commit.changed_files);
    tracing::debug!(tags = %tags.display(), "commit classified");

    let entry = LogEntry::new(date, commit, tags);
    let log_path = LogWriter::new(config).write_entry(&entry)?;

    let link = updater.ensure_log_linked(date);

    Ok(RunReport {
        date,
        commit: entry.commit,
        tags: entry.tags,
        log_path,
        link,
    })
}
