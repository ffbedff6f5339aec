//! Index document updater
//!
//! Keeps exactly one link per dated log in the project README. Links go right
//! under the configured heading (newest first); a missing heading is appended
//! to the end of the document together with the first link.

use std::fs;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::JournalError;
use super::encoding::{ChardetDetector, EncodingDetector, decode};
use crate::config::JournalConfig;
use crate::model::DATE_FORMAT;

/// ATX heading: `## Title` with optional closing hashes
///
/// Groups:
/// 1. the opening `#` run (level)
/// 2. the title text
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(#{1,6})[ \t]+(.*?)(?:[ \t]+#+)?[ \t]*$").expect("Invalid heading regex")
});

/// Opening or closing line of a fenced code block
///
/// Groups:
/// 1. the fence marker (three or more backticks or tildes)
/// 2. anything after the marker (info string)
static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(`{3,}|~{3,})(.*)$").expect("Invalid fence regex")
});

/// Where a new link line was put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Directly below the existing log section heading
    UnderHeading,
    /// Heading and link appended at the end of the document
    NewSection,
}

/// Result of [`IndexUpdater::ensure_log_linked`]
#[derive(Debug)]
pub enum LinkOutcome {
    /// The link line was already present; nothing was written
    AlreadyLinked,
    /// The document was rewritten with the new link
    Linked(Placement),
    /// Reading or writing the document failed; the run carries on
    Failed(JournalError),
}

impl LinkOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, LinkOutcome::Failed(_))
    }
}

/// Updates the index document for a [`JournalConfig`]
pub struct IndexUpdater<'a> {
    config: &'a JournalConfig,
    detector: &'a dyn EncodingDetector,
}

impl<'a> IndexUpdater<'a> {
    pub fn new(config: &'a JournalConfig) -> Self {
        Self {
            config,
            detector: &ChardetDetector,
        }
    }

    /// Use a specific encoding detector when reading the document
    pub fn with_detector(mut self, detector: &'a dyn EncodingDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Canonical link line for `date`
    pub fn link_line(&self, date: NaiveDate) -> String {
        format!(
            "- [{} commit log]({})",
            date.format(DATE_FORMAT),
            self.config.link_target(date)
        )
    }

    /// Make sure the index links to the log of `date`
    ///
    /// Safe to call repeatedly. Failures are logged and returned as
    /// [`LinkOutcome::Failed`], never propagated.
    pub fn ensure_log_linked(&self, date: NaiveDate) -> LinkOutcome {
        match self.try_link(date) {
            Ok(outcome) => {
                match outcome {
                    LinkOutcome::AlreadyLinked => {
                        tracing::info!("index already links today's log")
                    }
                    _ => tracing::info!(
                        "link added to {}",
                        self.config.index_path().display()
                    ),
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(
                    recoverability = ?e.recoverability(),
                    "index not updated: {}",
                    e
                );
                LinkOutcome::Failed(e)
            }
        }
    }

    fn try_link(&self, date: NaiveDate) -> Result<LinkOutcome, JournalError> {
        let path = self.config.index_path();
        let bytes = fs::read(&path).map_err(|source| JournalError::ReadIndex {
            path: path.clone(),
            source,
        })?;

        let decoded = decode(&bytes, self.detector);
        if decoded.lossy {
            tracing::warn!(
                "{} is not valid {}; undecodable bytes were replaced",
                path.display(),
                decoded.encoding.name()
            );
        }

        let link = self.link_line(date);
        match link_into(&decoded.text, &self.config.section_heading, &link) {
            None => Ok(LinkOutcome::AlreadyLinked),
            Some((updated, placement)) => {
                fs::write(&path, updated)
                    .map_err(|source| JournalError::WriteIndex { path, source })?;
                Ok(LinkOutcome::Linked(placement))
            }
        }
    }
}

/// Insert `link` into `content`
///
/// Returns `None` when `link` already appears verbatim. Line endings follow
/// the document (CRLF if it has any).
pub fn link_into(content: &str, heading: &str, link: &str) -> Option<(String, Placement)> {
    if content.contains(link) {
        return None;
    }

    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };

    if let Some(end) = heading_line_end(content, heading) {
        let mut out = String::with_capacity(content.len() + link.len() + 2 * eol.len());
        out.push_str(&content[..end]);
        if !out.ends_with('\n') {
            out.push_str(eol);
        }
        out.push_str(link);
        out.push_str(eol);
        out.push_str(&content[end..]);
        return Some((out, Placement::UnderHeading));
    }

    let mut out = content.to_string();
    if !out.is_empty() {
        if !out.ends_with('\n') {
            out.push_str(eol);
        }
        out.push_str(eol);
    }
    out.push_str(heading);
    out.push_str(eol);
    out.push_str(link);
    out.push_str(eol);
    Some((out, Placement::NewSection))
}

/// Byte offset just past the first line matching `heading`
///
/// Lines inside fenced code blocks are never headings.
fn heading_line_end(content: &str, heading: &str) -> Option<usize> {
    let mut offset = 0;
    // (marker byte, marker length) of the open fence
    let mut fence: Option<(u8, usize)> = None;

    for line in content.split_inclusive('\n') {
        offset += line.len();
        let text = line.trim_end_matches(['\n', '\r']);

        if let Some(caps) = FENCE_REGEX.captures(text) {
            let marker = caps[1].as_bytes();
            match fence {
                None => fence = Some((marker[0], marker.len())),
                Some((open, len))
                    if open == marker[0] && marker.len() >= len && caps[2].trim().is_empty() =>
                {
                    fence = None
                }
                Some(_) => {}
            }
            continue;
        }

        if fence.is_none() && is_same_heading(text, heading) {
            return Some(offset);
        }
    }
    None
}

fn is_same_heading(line: &str, heading: &str) -> bool {
    if line.trim() == heading.trim() {
        return true;
    }
    match (HEADING_REGEX.captures(line), HEADING_REGEX.captures(heading)) {
        (Some(a), Some(b)) => {
            a[1].len() == b[1].len() && a[2].trim().to_lowercase() == b[2].trim().to_lowercase()
        }
        _ => false,
    }
}
