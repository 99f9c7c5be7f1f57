//! Shared reqwest plumbing for upstream clients.

use std::time::Duration;

use serde::de::DeserializeOwned;

use yacal_core::upstream::{Result, UpstreamError};

/// Builds the HTTP client shared by both upstream clients.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("yacal/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Maps transport errors to upstream errors.
pub(crate) fn map_request_error(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Request(err.to_string())
}

/// Decodes a JSON body, turning non-success statuses into errors.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await.map_err(map_request_error)?;
    serde_json::from_slice(&bytes).map_err(|e| UpstreamError::InvalidPayload(e.to_string()))
}

/// Joins a base URL and a path without doubling slashes.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://a.test", "/x"), "http://a.test/x");
        assert_eq!(join_url("http://a.test/", "/x"), "http://a.test/x");
    }
}
