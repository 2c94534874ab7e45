//! Persistence of match results and running player totals.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::data::{
    match_record::MatchRecordRepository, match_stat::MatchStatRepository,
    player::PlayerRepository,
};
use crate::error::{pubg::PubgError, AppError};
use crate::model::player::MatchTotalsParam;
use crate::model::report::{ScoredPlayer, Team};
use crate::model::stats::CreateMatchStatParam;
use crate::pubg::model::{MatchResponse, ParticipantStats};
use crate::pubg::MatchLookup;

/// Service recording reported matches into the database.
pub struct StatsService {
    db: DatabaseConnection,
    lookup: Arc<dyn MatchLookup>,
}

impl StatsService {
    /// Creates a new StatsService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `lookup` - Match-lookup collaborator, used to resolve account ids for
    ///   participants whose payload lacks one
    pub fn new(db: DatabaseConnection, lookup: Arc<dyn MatchLookup>) -> Self {
        Self { db, lookup }
    }

    /// Records one reported match: the match row, a stat line per player, and
    /// each player's running totals.
    ///
    /// The match row insert is idempotent so a match reported through multiple
    /// paths is stored once. Per-player failures are logged and skipped; one bad
    /// participant never aborts the rest of the report.
    ///
    /// # Arguments
    /// - `payload` - The full match payload
    /// - `teams` - Scored teams built from the same payload
    ///
    /// # Returns
    /// - `Ok(())` - Match recorded (individual player lines may have been skipped)
    /// - `Err(AppError::DbErr)` - Database error creating the match row
    pub async fn record_match(
        &self,
        payload: &MatchResponse,
        teams: &[Team],
    ) -> Result<(), AppError> {
        let attributes = &payload.data.attributes;

        MatchRecordRepository::new(&self.db)
            .find_or_create(&payload.data.id, &attributes.map_name, attributes.duration)
            .await?;

        for team in teams {
            for player in &team.players {
                if let Err(e) = self.record_player(&payload.data.id, team, player).await {
                    tracing::error!(
                        "Failed to record stats for '{}' in match {}: {}",
                        player.participant.stats().name,
                        payload.data.id,
                        e
                    );
                }
            }
        }

        Ok(())
    }

    async fn record_player(
        &self,
        match_id: &str,
        team: &Team,
        scored: &ScoredPlayer,
    ) -> Result<(), AppError> {
        let stats = scored.participant.stats();
        let pubg_id = self.resolve_player_id(stats).await?;

        let player_repo = PlayerRepository::new(&self.db);
        player_repo.find_or_create(&pubg_id, &stats.name).await?;

        MatchStatRepository::new(&self.db)
            .create(CreateMatchStatParam {
                match_id: match_id.to_string(),
                player_id: pubg_id.clone(),
                kills: stats.kills as i32,
                assists: stats.assists as i32,
                damage: stats.damage_dealt,
                time_survived: stats.time_survived,
                rank: team.rank() as i32,
                score: scored.mvp_score,
            })
            .await?;

        player_repo
            .add_match_totals(
                &pubg_id,
                &MatchTotalsParam {
                    score: scored.mvp_score,
                    kills: stats.kills as i32,
                    assists: stats.assists as i32,
                    damage: stats.damage_dealt,
                },
            )
            .await?;

        Ok(())
    }

    async fn resolve_player_id(&self, stats: &ParticipantStats) -> Result<String, PubgError> {
        if !stats.player_id.is_empty() {
            return Ok(stats.player_id.clone());
        }

        // Bot fill players come through without an account id in the payload.
        self.lookup.player_id(&stats.name).await
    }
}
