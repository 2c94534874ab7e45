//! Match stat data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::stats::CreateMatchStatParam;

/// Repository providing database operations for per-match stat lines.
pub struct MatchStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchStatRepository<'a> {
    /// Creates a new MatchStatRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one player's stat line for one match.
    ///
    /// # Arguments
    /// - `param` - Stat line parameters including raw counters and computed score
    ///
    /// # Returns
    /// - `Ok(())` - Stat line created
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMatchStatParam) -> Result<(), DbErr> {
        let entity = entity::match_stat::ActiveModel {
            match_id: ActiveValue::Set(param.match_id),
            player_id: ActiveValue::Set(param.player_id),
            kills: ActiveValue::Set(param.kills),
            assists: ActiveValue::Set(param.assists),
            damage: ActiveValue::Set(param.damage),
            time_survived: ActiveValue::Set(param.time_survived),
            rank: ActiveValue::Set(param.rank),
            score: ActiveValue::Set(param.score),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        entity::prelude::MatchStat::insert(entity)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
