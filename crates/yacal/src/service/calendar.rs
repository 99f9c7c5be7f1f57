//! Cache-aside reads, refreshes and exports.

use yacal_core::calendar::{
    CalendarError, CalendarRequest, CalendarSnapshot, RefreshedCalendarSnapshot, Result,
};
use yacal_core::export::{export_ics, parse_timezone, IcsDocument};

use super::{Aggregator, CalendarStore};

/// The calendar pipeline as seen by handlers.
#[derive(Clone)]
pub struct CalendarService {
    aggregator: Aggregator,
    store: CalendarStore,
}

impl CalendarService {
    pub fn new(aggregator: Aggregator, store: CalendarStore) -> Self {
        Self { aggregator, store }
    }

    pub fn store(&self) -> &CalendarStore {
        &self.store
    }

    /// Returns the cached snapshot, fetching and caching it on a miss.
    ///
    /// A cache that can't be read counts as a miss, and a failed write only
    /// costs the next request a fetch.
    pub async fn get_cached_calendar(&self, request: &CalendarRequest) -> Result<CalendarSnapshot> {
        match self.store.read(request).await {
            Ok(Some(snapshot)) => return Ok(snapshot),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(
                    cache_key = %self.store.key(request),
                    error = %err,
                    "Cache read failed, fetching upstream"
                );
            }
        }

        let snapshot = self.aggregator.get_calendar(request).await?;

        if let Err(err) = self.store.write_default(request, &snapshot).await {
            tracing::warn!(
                cache_key = %self.store.key(request),
                error = %err,
                "Failed to cache calendar"
            );
        }

        Ok(snapshot)
    }

    /// Refetches a cached calendar and reports whether it changed.
    ///
    /// The fresh snapshot always replaces the cached one, changed or not.
    /// Refreshing a calendar that was never cached is an error, and so is a
    /// cache that can't be read.
    pub async fn refresh(&self, request: &CalendarRequest) -> Result<RefreshedCalendarSnapshot> {
        let cache_key = self.store.key(request);

        let cached = match self.store.read(request).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Err(CalendarError::CacheMiss { key: cache_key }),
            Err(err) => {
                tracing::error!(%cache_key, error = %err, "Cache read failed during refresh");
                return Err(CalendarError::cache_read(err));
            }
        };

        let fresh = self.aggregator.get_calendar(request).await?;
        let changed = cached.content_hash() != fresh.content_hash();

        self.store
            .write_default(request, &fresh)
            .await
            .map_err(|err| {
                tracing::error!(%cache_key, error = %err, "Failed to write refreshed calendar");
                CalendarError::cache_write(err)
            })?;

        tracing::info!(%cache_key, changed, events = fresh.event_count(), "Calendar refreshed");
        Ok(RefreshedCalendarSnapshot::new(fresh, changed))
    }

    /// Exports the (cache-aside) calendar of a request as iCalendar.
    ///
    /// The timezone is checked before anything is fetched.
    pub async fn export(&self, request: &CalendarRequest, timezone: &str) -> Result<IcsDocument> {
        parse_timezone(timezone)?;

        let snapshot = self.get_cached_calendar(request).await?;
        let document = export_ics(&snapshot, timezone)?;

        tracing::debug!(
            calendar_id = request.calendar_id,
            timezone,
            events = document.event_count(),
            "Exported calendar"
        );
        Ok(document)
    }
}
