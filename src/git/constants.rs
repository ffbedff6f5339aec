//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and error patterns.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const DIFF: &str = "diff";
    pub const DIFF_TREE: &str = "diff-tree";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given directory (global flag)
    pub const CHANGE_DIR: &str = "-C";
    /// Set a config value for this invocation only (global flag)
    pub const CONFIG: &str = "-c";
    /// Print paths verbatim instead of octal-escaping non-ASCII bytes
    pub const QUOTEPATH_OFF: &str = "core.quotepath=off";
    /// Limit `git log` to the latest commit
    pub const LATEST_ONLY: &str = "-1";
    /// Raw commit message body
    pub const PRETTY_BODY: &str = "--pretty=%B";
    /// Only list changed paths
    pub const NAME_ONLY: &str = "--name-only";
    /// Let `diff-tree` show a parentless commit as adding every file
    pub const ROOT: &str = "--root";
    /// Omit the commit id line from `diff-tree` output
    pub const NO_COMMIT_ID: &str = "--no-commit-id";
    /// Descend into subdirectories
    pub const RECURSIVE: &str = "-r";
}

/// Revisions used by the commit reader
pub mod revisions {
    pub const HEAD: &str = "HEAD";
    pub const PARENT: &str = "HEAD~1";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
}
