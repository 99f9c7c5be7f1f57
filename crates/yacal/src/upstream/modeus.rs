//! Modeus event search client.

use async_trait::async_trait;
use serde::Deserialize;

use yacal_core::calendar::{ModeusEvent, ModeusEventsBody};
use yacal_core::upstream::{ModeusSource, Result};

use super::http::{decode_json, join_url, map_request_error};

const EVENTS_SEARCH_PATH: &str = "/schedule-calendar-v2/api/calendar/events/search";

/// HAL envelope returned by the search endpoint. An empty result has no
/// `_embedded` member at all.
#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(rename = "_embedded", default)]
    embedded: Embedded,
}

#[derive(Debug, Default, Deserialize)]
struct Embedded {
    #[serde(default)]
    events: Vec<ModeusEvent>,
}

/// HTTP client for the Modeus calendar API.
#[derive(Debug, Clone)]
pub struct ModeusClient {
    client: reqwest::Client,
    base_url: String,
}

impl ModeusClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ModeusSource for ModeusClient {
    async fn fetch_modeus(
        &self,
        session_token: &str,
        body: &ModeusEventsBody,
    ) -> Result<Vec<ModeusEvent>> {
        let response = self
            .client
            .post(join_url(&self.base_url, EVENTS_SEARCH_PATH))
            .bearer_auth(session_token)
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        let search: SearchResponse = decode_json(response).await?;
        tracing::debug!(
            events = search.embedded.events.len(),
            "Fetched Modeus events"
        );
        Ok(search.embedded.events)
    }
}
