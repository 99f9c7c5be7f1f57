//! ICS document generation.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, CalendarDateTime, Component, DatePerhapsTime, Event, EventLike};

use crate::calendar::{CalendarSnapshot, EventSource, ModeusEvent, NetologyEvent};

use super::{ExportError, Result};

/// Product identifier written to every exported document.
pub const PRODUCT_ID: &str = "yet_another_calendar";

/// MIME type of exported documents.
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// A rendered iCalendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsDocument {
    bytes: Vec<u8>,
    event_count: usize,
}

impl IcsDocument {
    /// Number of VEVENT components in the document.
    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Resolves an IANA timezone name, ignoring case.
///
/// Documents always carry the canonical spelling, e.g. `utc` exports as `UTC`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .or_else(|_| Tz::from_str_insensitive(name))
        .map_err(|_| ExportError::InvalidTimezone(name.to_string()))
}

/// Exports a snapshot, stamping the document with the current time.
pub fn export_ics(snapshot: &CalendarSnapshot, timezone: &str) -> Result<IcsDocument> {
    export_ics_at(snapshot, timezone, Utc::now())
}

/// Exports a snapshot with an explicit DTSTAMP.
///
/// The timezone is validated before any event is looked at. Webinars missing
/// a start or an end are skipped.
pub fn export_ics_at(
    snapshot: &CalendarSnapshot,
    timezone: &str,
    now: DateTime<Utc>,
) -> Result<IcsDocument> {
    let tz = parse_timezone(timezone)?;

    let mut calendar = Calendar::new();
    let mut event_count = 0;

    for webinar in &snapshot.netology.webinars {
        if let Some(event) = webinar_event(webinar, tz, now) {
            calendar.push(event);
            event_count += 1;
        }
    }

    for lesson in &snapshot.modeus {
        calendar.push(lesson_event(lesson, tz, now));
        event_count += 1;
    }

    let rendered = set_product_id(&calendar.done().to_string());

    Ok(IcsDocument {
        bytes: rendered.into_bytes(),
        event_count,
    })
}

fn webinar_event(webinar: &NetologyEvent, tz: Tz, now: DateTime<Utc>) -> Option<Event> {
    let (starts_at, ends_at) = webinar.schedule()?;

    let mut event = Event::new();
    event
        .uid(&webinar.id.to_string())
        .summary(&summary(EventSource::Netology, &webinar.title))
        .starts(localize(starts_at, tz))
        .ends(localize(ends_at, tz))
        .timestamp(now);

    if let Some(ref url) = webinar.webinar_url {
        event.location(url);
    }

    Some(event.done())
}

fn lesson_event(lesson: &ModeusEvent, tz: Tz, now: DateTime<Utc>) -> Event {
    let mut event = Event::new();
    event
        .uid(&lesson.id.to_string())
        .summary(&summary(EventSource::Modeus, &lesson.name))
        .starts(localize(lesson.start_time, tz))
        .ends(localize(lesson.end_time, tz))
        .timestamp(now);

    if let Some(ref description) = lesson.description {
        event.description(description);
    }

    event.done()
}

fn summary(source: EventSource, title: &str) -> String {
    format!("{}: {}", source, title)
}

fn localize(instant: DateTime<Utc>, tz: Tz) -> DatePerhapsTime {
    DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone {
        date_time: instant.with_timezone(&tz).naive_local(),
        tzid: tz.name().to_string(),
    })
}

/// Replaces the library's PRODID and drops the default CALSCALE line.
fn set_product_id(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODUCT_ID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
