//! Error types for OxiBWT operations.
//!
//! Every transform in the workspace reports failures through [`OxiBwtError`].
//! Errors are detected before any output is produced, so a returned error
//! always means no partial result exists.

use std::io;
use thiserror::Error;

/// The main error type for OxiBWT operations.
#[derive(Debug, Error)]
pub enum OxiBwtError {
    /// I/O error from the underlying byte stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Absent or unusable argument (empty block, unsupported mode flag, ...).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// An index fell outside its valid range.
    #[error("{what} {index} out of range (valid range is 0..{len})")]
    OutOfRange {
        /// What kind of index was rejected.
        what: &'static str,
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound of the valid range.
        len: usize,
    },

    /// Framed input does not match its header.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// Description of the malformation.
        message: String,
    },
}

/// Result type alias for OxiBWT operations.
pub type Result<T> = std::result::Result<T, OxiBwtError>;

impl OxiBwtError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an out of range error.
    pub fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { what, index, len }
    }

    /// Create a malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Returns `true` if the error was caused by the caller's arguments
    /// rather than by the data or the stream.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
