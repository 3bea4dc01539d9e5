//! Error types

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by dictionary persistence.
///
/// Classification itself never fails: ambiguous words are resolved
/// deterministically and sentences without taggable words are flagged as
/// degenerate instead of being rejected.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a snapshot failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The snapshot exists but cannot be decoded.
    #[error("corrupt dictionary snapshot: {message}")]
    CorruptSnapshot { message: String },
}

impl Error {
    pub(crate) fn corrupt<S: Into<String>>(message: S) -> Self {
        Error::CorruptSnapshot {
            message: message.into(),
        }
    }

    /// Whether this error reports an undecodable snapshot rather than an I/O failure.
    pub fn is_corrupt_snapshot(&self) -> bool {
        matches!(self, Error::CorruptSnapshot { .. })
    }
}
