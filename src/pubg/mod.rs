//! PUBG REST API integration.
//!
//! This module owns the boundary to the PUBG API: typed payload models deserialized
//! and validated at the edge (`model`), and the HTTP client that fetches them
//! (`client`). The rest of the application consumes the API through the
//! [`MatchLookup`] trait so the polling and persistence logic can be tested against
//! canned payloads without network access.

pub mod client;
pub mod model;

use async_trait::async_trait;

use crate::error::pubg::PubgError;
use crate::pubg::model::MatchResponse;

/// Match-lookup collaborator consumed by the subscription poller and stats recorder.
///
/// Implemented by [`client::PubgClient`] in production and by in-memory fakes in tests.
#[async_trait]
pub trait MatchLookup: Send + Sync {
    /// Returns the ids of the player's most recent matches, newest first.
    async fn recent_match_ids(
        &self,
        player_name: &str,
        count: usize,
    ) -> Result<Vec<String>, PubgError>;

    /// Fetches and validates the full payload for one match.
    async fn fetch_match(&self, match_id: &str) -> Result<MatchResponse, PubgError>;

    /// Resolves a player name to its external PUBG account id.
    async fn player_id(&self, player_name: &str) -> Result<String, PubgError>;
}
