//! Error types for column metadata resolution.

use std::panic::Location;
use thiserror::Error;

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for column metadata operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or truncated column definition record.
    ///
    /// Fatal for the whole result set: no partial metadata is exposed.
    #[error("Protocol decode error in column definition {ordinal}: {message}")]
    ProtocolDecode { ordinal: usize, message: String },

    /// Buffer too small.
    #[error("Buffer too small: need {needed} bytes, have {available} filed at {location}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        location: &'static Location<'static>,
    },

    /// Column ordinal outside `[1, count]`.
    #[error("Column index {index} out of range (columns: {count})")]
    IndexOutOfRange { index: usize, count: usize },

    /// Column not found by name.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Invalid connect string or connection option.
    #[error("Invalid connect string: {message}")]
    InvalidConnectString { message: String },
}

impl Error {
    /// Create a protocol decode error for the column at `ordinal` (1-based).
    pub fn protocol(ordinal: usize, message: impl Into<String>) -> Self {
        Self::ProtocolDecode {
            ordinal,
            message: message.into(),
        }
    }

    /// Create a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create an invalid connect string error.
    pub fn invalid_connect_string(message: impl Into<String>) -> Self {
        Self::InvalidConnectString {
            message: message.into(),
        }
    }
}
