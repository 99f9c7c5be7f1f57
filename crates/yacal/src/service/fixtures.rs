//! Shared request and snapshot fixtures for tests.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use yacal_core::calendar::{
    CalendarRequest, ModeusEvent, ModeusEventsBody, NetologyCookies, NetologyEvent,
    NetologySchedule,
};

/// 2024-01-`day` at `hour`:00 UTC.
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}

/// A week-long query for calendar 42.
pub fn request() -> CalendarRequest {
    CalendarRequest::new(
        ModeusEventsBody::new(at(1, 0), at(8, 0)),
        "jwt-token",
        42,
        NetologyCookies::new("rt", "sess"),
    )
}

pub fn math() -> NetologySchedule {
    NetologySchedule::new(vec![
        NetologyEvent::new(1, "Math").with_times(at(1, 10), at(1, 11))
    ])
}

pub fn physics() -> Vec<ModeusEvent> {
    vec![ModeusEvent::new(
        Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap(),
        "Physics",
        at(1, 12),
        at(1, 13),
    )]
}
