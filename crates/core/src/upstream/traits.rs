use async_trait::async_trait;

use crate::calendar::{ModeusEvent, ModeusEventsBody, NetologyCookies, NetologySchedule};

use super::Result;

/// Source of Netology webinars.
#[async_trait]
pub trait NetologySource: Send + Sync {
    /// Fetches the webinars of a program calendar.
    async fn fetch_netology(
        &self,
        calendar_id: i64,
        cookies: &NetologyCookies,
    ) -> Result<NetologySchedule>;
}

/// Source of Modeus lessons.
#[async_trait]
pub trait ModeusSource: Send + Sync {
    /// Searches lessons matching the query body.
    async fn fetch_modeus(
        &self,
        session_token: &str,
        body: &ModeusEventsBody,
    ) -> Result<Vec<ModeusEvent>>;
}
