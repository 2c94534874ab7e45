//! Fake collaborators for service tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{pubg::PubgError, AppError};
use crate::pubg::model::MatchResponse;
use crate::pubg::MatchLookup;
use crate::service::subscription::ReportSink;

/// Match lookup serving a single canned payload, with a switchable failure mode.
pub struct FakeLookup {
    payload: Mutex<Option<MatchResponse>>,
    fail: AtomicBool,
}

impl FakeLookup {
    pub fn new(payload: Option<MatchResponse>) -> Self {
        Self {
            payload: Mutex::new(payload),
            fail: AtomicBool::new(false),
        }
    }

    pub fn set_payload(&self, payload: MatchResponse) {
        *self.payload.lock().unwrap() = Some(payload);
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl MatchLookup for FakeLookup {
    async fn recent_match_ids(
        &self,
        player_name: &str,
        count: usize,
    ) -> Result<Vec<String>, PubgError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PubgError::PlayerNotFound(player_name.to_string()));
        }

        Ok(self
            .payload
            .lock()
            .unwrap()
            .iter()
            .take(count)
            .map(|p| p.data.id.clone())
            .collect())
    }

    async fn fetch_match(&self, match_id: &str) -> Result<MatchResponse, PubgError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PubgError::MatchNotFound(match_id.to_string()));
        }

        self.payload
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| PubgError::MatchNotFound(match_id.to_string()))
    }

    async fn player_id(&self, player_name: &str) -> Result<String, PubgError> {
        Ok(format!("account.{}", player_name.to_lowercase()))
    }
}

/// Report sink recording every published match id and notice.
#[derive(Default)]
pub struct RecordingSink {
    published: Mutex<Vec<String>>,
    notices: Mutex<Vec<(u64, String)>>,
}

impl RecordingSink {
    pub fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<(u64, String)> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn publish_match(&self, payload: &MatchResponse) -> Result<(), AppError> {
        self.published.lock().unwrap().push(payload.data.id.clone());
        Ok(())
    }

    async fn notify(&self, channel_id: u64, text: &str) -> Result<(), AppError> {
        self.notices
            .lock()
            .unwrap()
            .push((channel_id, text.to_string()));
        Ok(())
    }
}
