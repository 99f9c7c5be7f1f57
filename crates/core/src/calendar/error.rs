use thiserror::Error;

use crate::cache::CacheError;
use crate::export::ExportError;
use crate::upstream::UpstreamError;

use super::EventSource;

/// Errors surfaced by the aggregation, caching, refresh and export pipeline.
///
/// None of these are retried internally; the variant tells the caller whether
/// a retry can help.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("{upstream} fetch failed: {message}")]
    UpstreamFetchFailure {
        upstream: EventSource,
        message: String,
    },
    #[error("No cached calendar to refresh: {key}")]
    CacheMiss { key: String },
    #[error("Can't read cache: {0}")]
    CacheReadFailure(String),
    #[error("Can't refresh cache: {0}")]
    CacheWriteFailure(String),
    #[error("Wrong timezone: {0}")]
    InvalidTimezone(String),
}

impl CalendarError {
    /// Tags an upstream error with the source it came from.
    pub fn upstream(upstream: EventSource, error: UpstreamError) -> Self {
        CalendarError::UpstreamFetchFailure {
            upstream,
            message: error.to_string(),
        }
    }

    /// Wraps a cache backend failure that happened while reading.
    pub fn cache_read(error: CacheError) -> Self {
        CalendarError::CacheReadFailure(error.to_string())
    }

    /// Wraps a cache backend failure that happened while writing.
    pub fn cache_write(error: CacheError) -> Self {
        CalendarError::CacheWriteFailure(error.to_string())
    }
}

impl From<ExportError> for CalendarError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::InvalidTimezone(name) => CalendarError::InvalidTimezone(name),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failure_display() {
        let error = CalendarError::upstream(
            EventSource::Netology,
            UpstreamError::Status {
                status: 401,
                message: "expired".to_string(),
            },
        );
        assert_eq!(
            error.to_string(),
            "Netology fetch failed: Upstream returned 401: expired"
        );
    }

    #[test]
    fn test_cache_miss_display() {
        let error = CalendarError::CacheMiss {
            key: "yet_another_calendar:calendar:abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No cached calendar to refresh: yet_another_calendar:calendar:abc"
        );
    }

    #[test]
    fn test_cache_read_failure_display() {
        let error =
            CalendarError::cache_read(CacheError::ConnectionFailed("refused".to_string()));
        assert_eq!(
            error.to_string(),
            "Can't read cache: Cache connection failed: refused"
        );
    }

    #[test]
    fn test_cache_write_failure_display() {
        let error =
            CalendarError::cache_write(CacheError::ConnectionFailed("refused".to_string()));
        assert_eq!(
            error.to_string(),
            "Can't refresh cache: Cache connection failed: refused"
        );
    }

    #[test]
    fn test_invalid_timezone_from_export_error() {
        let error: CalendarError = ExportError::InvalidTimezone("Not/AZone".to_string()).into();
        assert_eq!(error, CalendarError::InvalidTimezone("Not/AZone".to_string()));
        assert_eq!(error.to_string(), "Wrong timezone: Not/AZone");
    }
}
