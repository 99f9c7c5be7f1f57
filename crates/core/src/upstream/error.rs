use thiserror::Error;

/// Errors returned by upstream sources.
///
/// The pipeline treats all of them the same way; the variants only make the
/// logged message useful.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Request(String),
    #[error("Upstream returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid upstream payload: {0}")]
    InvalidPayload(String),
}

/// Result type for upstream fetches.
pub type Result<T> = std::result::Result<T, UpstreamError>;
