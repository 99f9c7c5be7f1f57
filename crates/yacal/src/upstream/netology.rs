//! Netology schedule client.

use async_trait::async_trait;
use reqwest::header::COOKIE;

use yacal_core::calendar::{NetologyCookies, NetologySchedule};
use yacal_core::upstream::{NetologySource, Result};

use super::http::{decode_json, join_url, map_request_error};

/// HTTP client for the Netology program schedule API.
#[derive(Debug, Clone)]
pub struct NetologyClient {
    client: reqwest::Client,
    base_url: String,
}

impl NetologyClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn schedule_url(&self, calendar_id: i64) -> String {
        join_url(
            &self.base_url,
            &format!("/backend/api/user/programs/{}/schedule", calendar_id),
        )
    }
}

#[async_trait]
impl NetologySource for NetologyClient {
    async fn fetch_netology(
        &self,
        calendar_id: i64,
        cookies: &NetologyCookies,
    ) -> Result<NetologySchedule> {
        let response = self
            .client
            .get(self.schedule_url(calendar_id))
            .header(COOKIE, cookies.header_value())
            .send()
            .await
            .map_err(map_request_error)?;

        let schedule: NetologySchedule = decode_json(response).await?;
        tracing::debug!(
            calendar_id,
            webinars = schedule.webinars.len(),
            "Fetched Netology schedule"
        );
        Ok(schedule)
    }
}
