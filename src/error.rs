//! Failure policy shared by every stage

/// Whether a failure stops the run or degrades its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recoverability {
    /// The run continues with empty or absent data in place of the result
    Recoverable,
    /// The current step cannot produce its artifact
    Fatal,
}

impl Recoverability {
    pub fn is_recoverable(self) -> bool {
        matches!(self, Recoverability::Recoverable)
    }
}
