//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis for multi-instance deployments.
//! Per-key writes are serialized by Redis itself; concurrent refreshes of one
//! key resolve last-write-wins.

mod cache;
mod error;

pub use cache::RedisCache;
