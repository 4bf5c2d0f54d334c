//! Error types for the fallible edges of the crate.
//!
//! The planning core itself never fails; degenerate input is handled by
//! policy. Errors only arise when parsing user-entered time text or when
//! reading and writing the persisted input document.

use thiserror::Error;

/// Failure to parse `hh:mm` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected hh:mm, got '{0}'")]
    MissingSeparator(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("hour {0} is out of range 0..24")]
    HourOutOfRange(i64),

    #[error("minute {0} is out of range 0..60")]
    MinuteOutOfRange(i64),
}

/// Failure to load or save the input document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),
}
