use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cached calendar TTL in seconds (default: 3600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Namespace prepended to every cache key (default: "yet_another_calendar")
    pub redis_prefix: String,
    /// Netology base URL (default: "https://netology.ru")
    pub netology_url: String,
    /// Modeus base URL (default: "https://utmn.modeus.org")
    pub modeus_url: String,
    /// Upstream request timeout in seconds (default: 30)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cached calendar TTL in seconds (default: 3600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `REDIS_PREFIX` - Cache key namespace (default: "yet_another_calendar")
    /// - `NETOLOGY_URL` - Netology base URL (default: "https://netology.ru")
    /// - `MODEUS_URL` - Modeus base URL (default: "https://utmn.modeus.org")
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            redis_prefix: env::var("REDIS_PREFIX")
                .unwrap_or_else(|_| "yet_another_calendar".to_string()),
            netology_url: env::var("NETOLOGY_URL")
                .unwrap_or_else(|_| "https://netology.ru".to_string()),
            modeus_url: env::var("MODEUS_URL")
                .unwrap_or_else(|_| "https://utmn.modeus.org".to_string()),
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get upstream timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}
