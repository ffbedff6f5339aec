//! Journal files
//!
//! Writes dated log entries and keeps the index document linked to them.

pub mod encoding;
mod index;
mod writer;

pub use encoding::{ChardetDetector, DecodedText, EncodingDetector, FixedEncoding, decode};
pub use index::{IndexUpdater, LinkOutcome, Placement, link_into};
pub use writer::{LogWriter, WritePolicy};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::Recoverability;

/// Errors that can occur while writing journal files
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("could not create log directory {}: {source}", .path.display())]
    CreateLogDir { path: PathBuf, source: io::Error },

    #[error("could not write log file {}: {source}", .path.display())]
    WriteLog { path: PathBuf, source: io::Error },

    #[error("could not read index document {}: {source}", .path.display())]
    ReadIndex { path: PathBuf, source: io::Error },

    #[error("could not write index document {}: {source}", .path.display())]
    WriteIndex { path: PathBuf, source: io::Error },
}

impl JournalError {
    /// Log file failures end the run; index failures only skip the link.
    pub fn recoverability(&self) -> Recoverability {
        match self {
            JournalError::CreateLogDir { .. } | JournalError::WriteLog { .. } => {
                Recoverability::Fatal
            }
            JournalError::ReadIndex { .. } | JournalError::WriteIndex { .. } => {
                Recoverability::Recoverable
            }
        }
    }
}
