//! Application state.
//!
//! The calendar service and configuration shared by all request handlers.
//! The cache backend is chosen by feature flag; see [`crate::cache`].

use std::sync::Arc;

use yacal_core::cache::Cache;
use yacal_core::upstream::{ModeusSource, NetologySource};

use crate::config::Config;
use crate::service::{Aggregator, CalendarService, CalendarStore};
use crate::upstream::{build_http_client, ModeusClient, NetologyClient};

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub calendar: CalendarService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the service from its collaborators.
    pub fn with_sources(
        cache: Arc<dyn Cache>,
        netology: Arc<dyn NetologySource>,
        modeus: Arc<dyn ModeusSource>,
        config: Config,
    ) -> Self {
        let aggregator = Aggregator::new(netology, modeus);
        let store = CalendarStore::new(cache, config.redis_prefix.clone(), config.cache_ttl());

        Self {
            calendar: CalendarService::new(aggregator, store),
            config: Arc::new(config),
        }
    }

    /// Wires the service with the HTTP upstream clients.
    fn build(cache: Arc<dyn Cache>, config: &Config) -> Result<Self, anyhow::Error> {
        let http = build_http_client(config.upstream_timeout())?;
        let netology = Arc::new(NetologyClient::new(http.clone(), &config.netology_url));
        let modeus = Arc::new(ModeusClient::new(http, &config.modeus_url));

        tracing::info!(
            netology_url = %config.netology_url,
            modeus_url = %config.modeus_url,
            timeout_seconds = config.upstream_timeout_seconds,
            "Upstream clients configured"
        );

        Ok(Self::with_sources(cache, netology, modeus, config.clone()))
    }
}

// ============================================================================
// Factory functions for each cache backend
// ============================================================================

#[cfg(feature = "memory")]
mod memory_backend {
    use super::*;
    use crate::cache::MemoryCache;

    impl AppState {
        /// Creates AppState with the in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            tracing::info!(max_entries = config.cache_max_entries, "Using in-memory cache");
            Self::build(memory_cache, config)
        }
    }
}

#[cfg(feature = "redis")]
mod redis_backend {
    use super::*;
    use crate::cache::RedisCache;

    impl AppState {
        /// Creates AppState with the Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);
            tracing::info!(prefix = %config.redis_prefix, "Connected to Redis cache");
            Self::build(redis_cache, config)
        }
    }
}

// ============================================================================
// Test support
// ============================================================================


#[cfg(test)]
mod tests {
    use super::test_support::test_config;
    use super::*;

    #[tokio::test]
    async fn test_build_uses_configured_prefix() {
        let cache = Arc::new(crate::cache::MemoryCache::new(10));
        let state = AppState::build(cache, &test_config()).unwrap();

        assert_eq!(state.config.redis_prefix, "test");
        assert!(state.calendar.store().ping().await.is_ok());
    }
}
