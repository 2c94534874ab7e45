//! HTTP client for the PUBG REST API.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, StatusCode};

use crate::error::pubg::PubgError;
use crate::pubg::model::{MatchResponse, PlayerIndexResponse, PlayerResource};
use crate::pubg::MatchLookup;

const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Client for the PUBG REST API.
///
/// Wraps a shared `reqwest::Client` with the API key and shard-scoped base URL.
/// The API is rate-limited upstream; throttling surfaces as a request error that
/// callers treat as transient.
pub struct PubgClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PubgClient {
    /// Creates a new PUBG API client.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `api_key` - Bearer token for the API; surrounding whitespace is trimmed
    /// - `base_url` - Shard-scoped base URL, e.g. `https://api.pubg.com/shards/steam`
    pub fn new(http: reqwest::Client, api_key: &str, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        }
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, PubgError> {
        let response = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, JSON_API_CONTENT_TYPE)
            .query(query)
            .send()
            .await?;

        Ok(response)
    }

    /// Looks up a player resource by name.
    ///
    /// # Returns
    /// - `Ok(PlayerResource)` - Account id plus recent match references
    /// - `Err(PubgError::PlayerNotFound)` - API knows no player with that name
    /// - `Err(PubgError::Request)` - Transport or status failure
    pub async fn player(&self, player_name: &str) -> Result<PlayerResource, PubgError> {
        let response = self
            .get("players", &[("filter[playerNames]", player_name)])
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PubgError::PlayerNotFound(player_name.to_string()));
        }

        let index: PlayerIndexResponse = response.error_for_status()?.json().await?;

        index
            .data
            .into_iter()
            .next()
            .ok_or_else(|| PubgError::PlayerNotFound(player_name.to_string()))
    }

    /// Scans a player's recent matches for the most recent custom match.
    ///
    /// Fetches up to `depth` recent match payloads, newest first, and returns the
    /// first one whose match type is custom. Individual fetch failures are logged
    /// and skipped so one expired match id does not hide a newer custom match.
    ///
    /// # Returns
    /// - `Ok(Some(MatchResponse))` - Most recent custom match within `depth`
    /// - `Ok(None)` - No custom match in the player's recent history
    /// - `Err(PubgError)` - Player lookup itself failed
    pub async fn find_last_custom_match(
        &self,
        player_name: &str,
        depth: usize,
    ) -> Result<Option<MatchResponse>, PubgError> {
        for match_id in self.recent_match_ids(player_name, depth).await? {
            match self.fetch_match(&match_id).await {
                Ok(payload) if payload.data.attributes.is_custom() => return Ok(Some(payload)),
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to fetch match {}: {}", match_id, e),
            }
        }

        Ok(None)
    }
}

#[async_trait]
impl MatchLookup for PubgClient {
    async fn recent_match_ids(
        &self,
        player_name: &str,
        count: usize,
    ) -> Result<Vec<String>, PubgError> {
        let player = self.player(player_name).await?;

        Ok(player
            .relationships
            .matches
            .data
            .into_iter()
            .take(count)
            .map(|r| r.id)
            .collect())
    }

    async fn fetch_match(&self, match_id: &str) -> Result<MatchResponse, PubgError> {
        let response = self.get(&format!("matches/{}", match_id), &[]).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PubgError::MatchNotFound(match_id.to_string()));
        }

        let payload: MatchResponse = response.error_for_status()?.json().await?;
        payload.validate()?;

        Ok(payload)
    }

    async fn player_id(&self, player_name: &str) -> Result<String, PubgError> {
        Ok(self.player(player_name).await?.id)
    }
}
