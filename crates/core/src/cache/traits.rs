use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key/value cache backend.
///
/// Entries expire passively; there is no delete path.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL, replacing any prior value.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;
}
