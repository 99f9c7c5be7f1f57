//! HTTP clients for the upstream platforms.
//!
//! Both clients implement the source traits from `yacal_core::upstream`; the
//! service only ever sees the traits.

mod http;
#[cfg(test)]
pub mod mock;
mod modeus;
mod netology;

pub use http::build_http_client;
pub use modeus::ModeusClient;
pub use netology::NetologyClient;
