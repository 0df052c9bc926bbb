//! Error types for QuickCut.

use thiserror::Error;

/// Main error type for QuickCut operations.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("element not found: {id}")]
    NotFound { id: String },

    #[error("cannot remove the last remaining video clip")]
    EmptyCollection,

    #[error("text must not be empty")]
    EmptyText,

    #[error("invalid time range: {0}")]
    InvalidRange(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("object URL already released: {0}")]
    UrlReleased(String),

    #[error("an export is already in progress")]
    ExportInProgress,

    #[error("no export in progress")]
    NotExporting,

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for QuickCut operations.
pub type Result<T> = std::result::Result<T, EditorError>;
