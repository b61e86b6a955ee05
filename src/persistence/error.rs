//! Save file error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Save file error with location tracking.
///
/// Every way a load can fail (missing, empty, unreadable, malformed or
/// inconsistent file) is the same error to callers: start a fresh game.
#[derive(Debug, Clone, Display, Error)]
#[display("Save file error: {} at {}:{}", message, file, line)]
pub struct SaveError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveError {
    /// Creates a new save file error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SaveError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for SaveError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
