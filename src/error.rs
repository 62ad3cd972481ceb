//! Error types
//!
//! All errors that can surface from the store and the clipboard
//! boundary. Neither is ever fatal: store failures are logged and the
//! program keeps running in memory, clipboard failures become status
//! messages.

use thiserror::Error;

/// Errors from the persistence store
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error (wrapped)
    #[error("IO error: {0}")]
    Io(String),

    /// JSON encoding failed
    #[error("Encode error: {0}")]
    Encode(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encode(err.to_string())
    }
}

/// Errors from the system clipboard boundary
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard holds no text
    #[error("no text in clipboard")]
    NoText,

    /// The clipboard could not be opened
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Writing to the clipboard failed
    #[error("{0}")]
    Write(String),
}
