//! The aggregation and cache reconciliation pipeline.
//!
//! - [`Aggregator`] fetches both upstreams concurrently into one snapshot.
//! - [`CalendarStore`] reads and writes snapshots in the cache backend.
//! - [`CalendarService`] ties them together: cache-aside reads, refreshes
//!   and exports.

mod aggregator;
mod calendar;
#[cfg(test)]
pub(crate) mod fixtures;
mod store;

pub use aggregator::Aggregator;
pub use calendar::CalendarService;
pub use store::CalendarStore;
