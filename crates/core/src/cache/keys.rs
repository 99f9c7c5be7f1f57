//! Cache key derivation.
//!
//! Reads and writes must derive keys through these functions so a refresh
//! always lands on the entry a previous fetch populated.

use crate::calendar::{CalendarRequest, CanonicalHasher};

const REQUEST_DOMAIN: &[u8] = b"yacal:request:v1";

/// Returns the digest of the full request-parameter tuple.
///
/// Every parameter takes part: the event query (size, window, attendees in
/// order), the Modeus session token, the Netology calendar ID and both
/// Netology cookies.
pub fn request_digest(request: &CalendarRequest) -> String {
    let mut hasher = CanonicalHasher::new(REQUEST_DOMAIN);

    let body = &request.body;
    hasher.i64(1, i64::from(body.size));
    hasher.datetime(2, &body.time_min);
    hasher.datetime(3, &body.time_max);
    hasher.len(4, body.attendee_person_id.len());
    for person_id in &body.attendee_person_id {
        hasher.bytes(5, person_id.as_bytes());
    }

    hasher.str(6, &request.session_token);
    hasher.i64(7, request.calendar_id);
    hasher.str(8, &request.cookies.rtoken);
    hasher.str(9, &request.cookies.session);

    hasher.finish()
}

/// Returns the cache key for the calendar snapshot of a request.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use yacal_core::cache::calendar_key;
/// use yacal_core::calendar::{CalendarRequest, ModeusEventsBody, NetologyCookies};
///
/// let body = ModeusEventsBody::new(
///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
/// );
/// let request = CalendarRequest::new(body, "jwt", 42, NetologyCookies::new("r", "s"));
///
/// let key = calendar_key("yet_another_calendar", &request);
/// assert!(key.starts_with("yet_another_calendar:calendar:"));
/// assert_eq!(key, calendar_key("yet_another_calendar", &request));
/// ```
pub fn calendar_key(prefix: &str, request: &CalendarRequest) -> String {
    format!("{}:calendar:{}", prefix, request_digest(request))
}

/// Returns the key probed by readiness checks.
pub fn readiness_key(prefix: &str) -> String {
    format!("{}:_readyz", prefix)
}
