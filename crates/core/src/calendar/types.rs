use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::deserialize_optional_string;

use super::hash::snapshot_hash;

/// The upstream platform an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSource {
    Netology,
    Modeus,
}

impl EventSource {
    /// Human-readable name, also used as the exported summary prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSource::Netology => "Netology",
            EventSource::Modeus => "Modeus",
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Netology webinar.
///
/// Webinars without a start or an end time are reported to clients but
/// cannot be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetologyEvent {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub webinar_url: Option<String>,
}

impl NetologyEvent {
    /// Creates a webinar with no schedule and no URL.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            starts_at: None,
            ends_at: None,
            webinar_url: None,
        }
    }

    /// Sets the start and end times.
    pub fn with_times(mut self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self.ends_at = Some(ends_at);
        self
    }

    /// Sets the webinar URL.
    pub fn with_webinar_url(mut self, url: impl Into<String>) -> Self {
        self.webinar_url = Some(url.into());
        self
    }

    /// Returns the start and end times when both are known.
    pub fn schedule(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.starts_at?, self.ends_at?))
    }
}

/// The Netology half of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetologySchedule {
    #[serde(default)]
    pub webinars: Vec<NetologyEvent>,
}

impl NetologySchedule {
    pub fn new(webinars: Vec<NetologyEvent>) -> Self {
        Self { webinars }
    }

    /// Keeps webinars starting inside `[time_min, time_max)`.
    ///
    /// Webinars with no start time are kept: they belong to the program but
    /// have not been scheduled yet.
    pub fn within(mut self, time_min: DateTime<Utc>, time_max: DateTime<Utc>) -> Self {
        self.webinars.retain(|webinar| match webinar.starts_at {
            Some(start) => start >= time_min && start < time_max,
            None => true,
        });
        self
    }
}

/// A Modeus lesson. Start and end are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeusEvent {
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "start")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end")]
    pub end_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

impl ModeusEvent {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_time,
            end_time,
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One paired aggregation of both upstreams for a single request.
///
/// Only built from the results of both fetches; there is no way to build a
/// snapshot from one source alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSnapshot {
    pub netology: NetologySchedule,
    pub modeus: Vec<ModeusEvent>,
}

impl CalendarSnapshot {
    pub fn new(netology: NetologySchedule, modeus: Vec<ModeusEvent>) -> Self {
        Self { netology, modeus }
    }

    /// SHA-256 hex digest of the snapshot content.
    ///
    /// Stable for identical data in identical order. See [`snapshot_hash`]
    /// for the canonical encoding.
    pub fn content_hash(&self) -> String {
        snapshot_hash(self)
    }

    /// Total number of events from both sources.
    pub fn event_count(&self) -> usize {
        self.netology.webinars.len() + self.modeus.len()
    }
}

/// A freshly fetched snapshot and whether it differs from the cached one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshedCalendarSnapshot {
    #[serde(flatten)]
    pub snapshot: CalendarSnapshot,
    pub changed: bool,
}

impl RefreshedCalendarSnapshot {
    pub fn new(snapshot: CalendarSnapshot, changed: bool) -> Self {
        Self { snapshot, changed }
    }
}
