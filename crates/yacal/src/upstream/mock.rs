//! In-memory upstream sources for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use yacal_core::calendar::{
    ModeusEvent, ModeusEventsBody, NetologyCookies, NetologySchedule,
};
use yacal_core::upstream::{ModeusSource, NetologySource, Result, UpstreamError};

/// Canned response with a call counter. Clones share state.
#[derive(Clone)]
pub struct MockSource<T> {
    response: Arc<Mutex<std::result::Result<T, UpstreamError>>>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl<T: Clone> MockSource<T> {
    pub fn ok(value: T) -> Self {
        Self::with_response(Ok(value))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_response(Err(UpstreamError::Request(message.to_string())))
    }

    fn with_response(response: std::result::Result<T, UpstreamError>) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Delays every response, to observe cancellation.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replaces the canned response for subsequent calls.
    pub fn respond_with(&self, value: T) {
        *self.response.lock().unwrap() = Ok(value);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = self.response.lock().unwrap().clone();
        response
    }
}

pub type MockNetology = MockSource<NetologySchedule>;
pub type MockModeus = MockSource<Vec<ModeusEvent>>;

#[async_trait]
impl NetologySource for MockSource<NetologySchedule> {
    async fn fetch_netology(
        &self,
        _calendar_id: i64,
        _cookies: &NetologyCookies,
    ) -> Result<NetologySchedule> {
        self.respond().await
    }
}

#[async_trait]
impl ModeusSource for MockSource<Vec<ModeusEvent>> {
    async fn fetch_modeus(
        &self,
        _session_token: &str,
        _body: &ModeusEventsBody,
    ) -> Result<Vec<ModeusEvent>> {
        self.respond().await
    }
}
