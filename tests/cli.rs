//! Runs the built binary the way the post-commit hook does.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_commit-journal"))
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run commit-journal")
}

#[test]
fn test_outside_repository_reports_on_stdout_only() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("README.md"), "# Project\n").unwrap();

    let output = run_in(&dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");
    assert!(stdout.contains("log file written"), "stdout: {stdout}");

    let logs: Vec<_> = std::fs::read_dir(dir.path().join("logs"))
        .unwrap()
        .collect();
    assert_eq!(logs.len(), 1);
    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("## Commit Logs"));
}

#[test]
fn test_fatal_log_error_still_exits_zero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("logs"), "blocker").unwrap();

    let output = run_in(&dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.is_empty(), "unexpected stderr: {stderr}");
    assert!(
        stdout.contains("journal entry was not written"),
        "stdout: {stdout}"
    );
}
