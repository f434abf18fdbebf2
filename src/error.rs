//! Error types for kavya.

use std::io;
use thiserror::Error;

/// Result type alias for kavya operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kavya operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// Storage key that cannot be mapped onto the backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Unknown content type, tone, length, or malformed request field.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// History entry not found.
    #[error("History entry not found: {0}")]
    EntryNotFound(i64),

    /// An operation needed a history entry but none are stored.
    #[error("No history entries yet")]
    EmptyHistory,

    /// The generation API rejected the request or reported a failure.
    #[error("{message}")]
    Remote {
        /// HTTP status, when the failure came with one.
        status: Option<u16>,
        /// Message taken from the error payload, or a generic fallback.
        message: String,
    },

    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
