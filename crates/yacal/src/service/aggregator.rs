//! Concurrent aggregation of both upstream sources.

use std::sync::Arc;

use yacal_core::calendar::{CalendarError, CalendarRequest, CalendarSnapshot, EventSource, Result};
use yacal_core::upstream::{ModeusSource, NetologySource};

/// Builds snapshots from one Netology and one Modeus fetch.
#[derive(Clone)]
pub struct Aggregator {
    netology: Arc<dyn NetologySource>,
    modeus: Arc<dyn ModeusSource>,
}

impl Aggregator {
    pub fn new(netology: Arc<dyn NetologySource>, modeus: Arc<dyn ModeusSource>) -> Self {
        Self { netology, modeus }
    }

    /// Fetches both sources concurrently and pairs the results.
    ///
    /// The first failing fetch fails the whole call and drops the other one
    /// mid-flight, so a snapshot is never built from a single source.
    /// Webinars are narrowed to the query's time window.
    pub async fn get_calendar(&self, request: &CalendarRequest) -> Result<CalendarSnapshot> {
        let netology = async {
            self.netology
                .fetch_netology(request.calendar_id, &request.cookies)
                .await
                .map_err(|e| CalendarError::upstream(EventSource::Netology, e))
        };
        let modeus = async {
            self.modeus
                .fetch_modeus(&request.session_token, &request.body)
                .await
                .map_err(|e| CalendarError::upstream(EventSource::Modeus, e))
        };

        let (schedule, lessons) = tokio::try_join!(netology, modeus).inspect_err(|err| {
            tracing::warn!(calendar_id = request.calendar_id, error = %err, "Aggregation failed");
        })?;

        let snapshot = CalendarSnapshot::new(
            schedule.within(request.body.time_min, request.body.time_max),
            lessons,
        );

        tracing::debug!(
            calendar_id = request.calendar_id,
            webinars = snapshot.netology.webinars.len(),
            lessons = snapshot.modeus.len(),
            "Aggregated calendar"
        );

        Ok(snapshot)
    }
}
