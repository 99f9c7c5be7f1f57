use thiserror::Error;

/// Errors that can occur while exporting a snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
