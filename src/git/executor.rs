//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use super::GitError;
use super::constants::{self, commands, errors, flags, revisions};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
    /// Program to invoke (normally `git`)
    program: String,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self {
            repo_path: None,
            program: constants::GIT_COMMAND.to_string(),
        }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
            ..Self::new()
        }
    }

    /// Replace the program that gets spawned
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run a git command with the given arguments
    ///
    /// Always adds `-c core.quotepath=off` so paths come back verbatim.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(&self.program);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::CHANGE_DIR).arg(path);
        }

        cmd.arg(flags::CONFIG).arg(flags::QUOTEPATH_OFF);
        cmd.args(args);

        tracing::debug!(program = %self.program, ?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git log -1 --pretty=%B`
    pub fn last_message_raw(&self) -> Result<String, GitError> {
        self.run(&[commands::LOG, flags::LATEST_ONLY, flags::PRETTY_BODY])
    }

    /// Run `git diff --name-only HEAD~1 HEAD`
    ///
    /// The root commit has no `HEAD~1`; in that case every file it added is
    /// listed via `git diff-tree --root`.
    pub fn changed_names_raw(&self) -> Result<String, GitError> {
        match self.run(&[
            commands::DIFF,
            flags::NAME_ONLY,
            revisions::PARENT,
            revisions::HEAD,
        ]) {
            Err(GitError::CommandFailed { stderr, .. }) => {
                tracing::debug!(%stderr, "no parent diff, listing root commit tree");
                self.root_names_raw()
            }
            other => other,
        }
    }

    /// Run `git diff-tree --root --no-commit-id --name-only -r HEAD`
    pub fn root_names_raw(&self) -> Result<String, GitError> {
        self.run(&[
            commands::DIFF_TREE,
            flags::ROOT,
            flags::NO_COMMIT_ID,
            flags::NAME_ONLY,
            flags::RECURSIVE,
            revisions::HEAD,
        ])
    }
}
