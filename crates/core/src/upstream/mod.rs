//! Upstream event sources.
//!
//! The traits here are implemented by the HTTP clients in the service shell
//! and by in-memory fakes in tests.

mod error;
mod traits;

pub use error::{Result, UpstreamError};
pub use traits::{ModeusSource, NetologySource};
