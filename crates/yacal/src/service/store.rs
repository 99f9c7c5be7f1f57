//! Snapshot persistence on top of a cache backend.

use std::sync::Arc;
use std::time::Duration;

use yacal_core::cache::{
    calendar_key, deserialize_snapshot, readiness_key, serialize_snapshot, Cache, Result,
};
use yacal_core::calendar::{CalendarRequest, CalendarSnapshot};

/// Reads and writes calendar snapshots keyed by their request parameters.
#[derive(Clone)]
pub struct CalendarStore {
    cache: Arc<dyn Cache>,
    prefix: String,
    ttl: Duration,
}

impl CalendarStore {
    /// Creates a store.
    ///
    /// # Arguments
    ///
    /// * `cache` - The cache backend
    /// * `prefix` - Namespace prepended to every key
    /// * `ttl` - Expiration used by [`CalendarStore::write_default`]
    pub fn new(cache: Arc<dyn Cache>, prefix: impl Into<String>, ttl: Duration) -> Self {
        Self {
            cache,
            prefix: prefix.into(),
            ttl,
        }
    }

    /// Returns the cache key of a request.
    pub fn key(&self, request: &CalendarRequest) -> String {
        calendar_key(&self.prefix, request)
    }

    /// Reads the cached snapshot of a request.
    ///
    /// Bytes that no longer decode are reported as absent.
    pub async fn read(&self, request: &CalendarRequest) -> Result<Option<CalendarSnapshot>> {
        let cache_key = self.key(request);

        let Some(bytes) = self.cache.get(&cache_key).await? else {
            tracing::trace!(%cache_key, "Cache miss for calendar");
            return Ok(None);
        };

        match deserialize_snapshot(&bytes) {
            Ok(snapshot) => {
                tracing::trace!(%cache_key, "Cache hit for calendar");
                Ok(Some(snapshot))
            }
            Err(err) => {
                tracing::warn!(%cache_key, error = %err, "Cached calendar deserialization failed");
                Ok(None)
            }
        }
    }

    /// Stores a snapshot, replacing whatever the key held.
    pub async fn write(
        &self,
        request: &CalendarRequest,
        snapshot: &CalendarSnapshot,
        ttl: Duration,
    ) -> Result<()> {
        let cache_key = self.key(request);
        let bytes = serialize_snapshot(snapshot)?;
        self.cache.set(&cache_key, &bytes, Some(ttl)).await?;

        tracing::trace!(%cache_key, ttl_seconds = ttl.as_secs(), "Cached calendar");
        Ok(())
    }

    /// Stores a snapshot with the configured TTL.
    pub async fn write_default(
        &self,
        request: &CalendarRequest,
        snapshot: &CalendarSnapshot,
    ) -> Result<()> {
        self.write(request, snapshot, self.ttl).await
    }

    /// Checks that the backend answers.
    pub async fn ping(&self) -> Result<()> {
        self.cache.get(&readiness_key(&self.prefix)).await?;
        Ok(())
    }
}
