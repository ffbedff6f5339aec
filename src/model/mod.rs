//! Data models
//!
//! Plain data describing a commit, its tags and the journal entry built from
//! them. Nothing here touches git or the filesystem.

mod commit;
mod entry;
mod tag;

pub use commit::CommitInfo;
pub use entry::{DATE_FORMAT, LogEntry};
pub use tag::{Tag, TagSet};
