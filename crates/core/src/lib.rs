//! Functional core for yacal.
//!
//! Pure types and functions shared by the service shell: event and snapshot
//! types, snapshot hashing, cache key derivation and (de)serialization,
//! iCalendar export, and the traits the shell implements for its cache
//! backends and upstream sources.

pub mod cache;
pub mod calendar;
pub mod export;
pub mod serde;
pub mod upstream;
