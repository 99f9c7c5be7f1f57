//! Pure functions for mapping pipeline errors to HTTP status codes.

use super::CalendarError;

/// Maps a [`CalendarError`] to an HTTP status code.
///
/// - `InvalidTimezone` -> 400 (Bad Request)
/// - `UpstreamFetchFailure` -> 502 (Bad Gateway)
/// - `CacheMiss` -> 500 (Internal Server Error)
/// - `CacheReadFailure` -> 500 (Internal Server Error)
/// - `CacheWriteFailure` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use yacal_core::calendar::{calendar_error_to_status_code, CalendarError};
///
/// let error = CalendarError::InvalidTimezone("Not/AZone".to_string());
/// assert_eq!(calendar_error_to_status_code(&error), 400);
/// ```
pub fn calendar_error_to_status_code(error: &CalendarError) -> u16 {
    match error {
        CalendarError::InvalidTimezone(_) => 400,
        CalendarError::UpstreamFetchFailure { .. } => 502,
        CalendarError::CacheMiss { .. } => 500,
        CalendarError::CacheReadFailure(_) => 500,
        CalendarError::CacheWriteFailure(_) => 500,
    }
}
