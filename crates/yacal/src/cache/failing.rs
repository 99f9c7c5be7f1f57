//! Cache double whose reads and writes can be made to fail.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use yacal_core::cache::{Cache, CacheError, Result};

use super::MemoryCache;

/// Wraps a [`MemoryCache`] and fails on demand.
pub struct FailingCache {
    inner: MemoryCache,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryCache::new(100),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("connection refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionFailed("connection refused".to_string()));
        }
        self.inner.set(key, value, ttl).await
    }
}
