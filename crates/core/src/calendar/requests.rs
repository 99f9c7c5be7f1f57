use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default page size for Modeus event searches.
pub const DEFAULT_EVENTS_PAGE_SIZE: u32 = 500;

fn default_size() -> u32 {
    DEFAULT_EVENTS_PAGE_SIZE
}

/// Event query forwarded to Modeus.
///
/// Its time window also bounds the Netology webinars of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeusEventsBody {
    #[serde(default = "default_size")]
    pub size: u32,
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    #[serde(default)]
    pub attendee_person_id: Vec<Uuid>,
}

impl ModeusEventsBody {
    /// Creates a query for the given window with no attendee filter.
    pub fn new(time_min: DateTime<Utc>, time_max: DateTime<Utc>) -> Self {
        Self {
            size: DEFAULT_EVENTS_PAGE_SIZE,
            time_min,
            time_max,
            attendee_person_id: Vec::new(),
        }
    }

    /// Adds an attendee to filter on.
    pub fn with_attendee(mut self, person_id: Uuid) -> Self {
        self.attendee_person_id.push(person_id);
        self
    }
}

/// Netology session cookies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetologyCookies {
    pub rtoken: String,
    pub session: String,
}

impl NetologyCookies {
    pub fn new(rtoken: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            rtoken: rtoken.into(),
            session: session.into(),
        }
    }

    /// Renders the `Cookie` header value sent to Netology.
    pub fn header_value(&self) -> String {
        format!(
            "rtoken={}; _netology-on-rails_session={}",
            self.rtoken, self.session
        )
    }
}

/// The full set of request parameters identifying one calendar view.
///
/// Every field takes part in cache key derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    pub body: ModeusEventsBody,
    /// Modeus bearer token.
    pub session_token: String,
    /// Netology program calendar ID.
    pub calendar_id: i64,
    pub cookies: NetologyCookies,
}

impl CalendarRequest {
    pub fn new(
        body: ModeusEventsBody,
        session_token: impl Into<String>,
        calendar_id: i64,
        cookies: NetologyCookies,
    ) -> Self {
        Self {
            body,
            session_token: session_token.into(),
            calendar_id,
            cookies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_body_uses_camel_case() {
        let body = ModeusEventsBody::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap(),
        )
        .with_attendee(Uuid::nil());

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["size"], 500);
        assert_eq!(value["timeMin"], "2024-01-01T00:00:00Z");
        assert_eq!(value["timeMax"], "2024-01-08T00:00:00Z");
        assert_eq!(
            value["attendeePersonId"][0],
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_body_defaults() {
        let json = r#"{"timeMin": "2024-01-01T00:00:00Z", "timeMax": "2024-01-08T00:00:00Z"}"#;
        let body: ModeusEventsBody = serde_json::from_str(json).unwrap();

        assert_eq!(body.size, DEFAULT_EVENTS_PAGE_SIZE);
        assert!(body.attendee_person_id.is_empty());
    }

    #[test]
    fn test_cookie_header_value() {
        let cookies = NetologyCookies::new("abc", "xyz");
        assert_eq!(
            cookies.header_value(),
            "rtoken=abc; _netology-on-rails_session=xyz"
        );
    }
}
