//! Upstream credentials carried by API requests.

mod extractor;

pub use extractor::Credentials;
