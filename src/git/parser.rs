//! git output parser
//!
//! Turns raw `git log` / `git diff` output into commit metadata.

/// Parse `git log --pretty=%B` output
///
/// Surrounding whitespace is trimmed. A blank body counts as no message.
pub fn parse_message(output: &str) -> Option<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse `git diff --name-only` output into one path per line
///
/// Blank lines are dropped and each path is trimmed. Order is preserved.
pub fn parse_changed_files(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
