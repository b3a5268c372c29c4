use thiserror::Error;

/// Reasons a timestamp cannot be recovered from a snapshot name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("snapshot name has no trailing 14-digit timestamp: {0}")]
    Malformed(String),

    #[error("snapshot timestamp {timestamp} is not a valid local date/time: {name}")]
    InvalidDate { name: String, timestamp: String },
}
