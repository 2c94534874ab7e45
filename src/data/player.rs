//! Player data repository for database operations.
//!
//! This module provides the `PlayerRepository` for managing tracked players and their
//! running leaderboard totals. Totals are incremented with in-database expressions so
//! a crash between read and write can never lose a match's contribution.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::player::{MatchTotalsParam, Player};

/// Repository providing database operations for player management.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a player by their PUBG display name.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that name is tracked yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Finds a player by PUBG account id, creating the row if it does not exist.
    ///
    /// New players start with zeroed totals. The username is not updated on an
    /// existing row; PUBG account ids are stable while names can be rebought, so
    /// the first-seen name sticks.
    ///
    /// # Arguments
    /// - `pubg_id` - External PUBG account id
    /// - `username` - Display name to store if the player is new
    ///
    /// # Returns
    /// - `Ok(Player)` - The existing or newly created player
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn find_or_create(&self, pubg_id: &str, username: &str) -> Result<Player, DbErr> {
        if let Some(existing) = entity::prelude::Player::find_by_id(pubg_id)
            .one(self.db)
            .await?
        {
            return Ok(Player::from_entity(existing));
        }

        let entity = entity::player::ActiveModel {
            pubg_id: ActiveValue::Set(pubg_id.to_string()),
            username: ActiveValue::Set(username.to_string()),
            total_score: ActiveValue::Set(0.0),
            total_kills: ActiveValue::Set(0),
            total_assists: ActiveValue::Set(0),
            total_damage: ActiveValue::Set(0.0),
            total_matches_played: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        };

        let entity = entity::prelude::Player::insert(entity)
            .exec_with_returning(self.db)
            .await?;

        Ok(Player::from_entity(entity))
    }

    /// Adds one match's contribution to a player's running totals.
    ///
    /// Applies all increments in a single UPDATE with column expressions, including
    /// advancing `total_matches_played` by one.
    ///
    /// # Arguments
    /// - `pubg_id` - External PUBG account id of the player
    /// - `param` - The match's score, kills, assists, and damage contribution
    ///
    /// # Returns
    /// - `Ok(())` - Totals updated (or no matching player row)
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_match_totals(
        &self,
        pubg_id: &str,
        param: &MatchTotalsParam,
    ) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::PubgId.eq(pubg_id))
            .col_expr(
                entity::player::Column::TotalScore,
                Expr::col(entity::player::Column::TotalScore).add(param.score),
            )
            .col_expr(
                entity::player::Column::TotalKills,
                Expr::col(entity::player::Column::TotalKills).add(param.kills),
            )
            .col_expr(
                entity::player::Column::TotalAssists,
                Expr::col(entity::player::Column::TotalAssists).add(param.assists),
            )
            .col_expr(
                entity::player::Column::TotalDamage,
                Expr::col(entity::player::Column::TotalDamage).add(param.damage),
            )
            .col_expr(
                entity::player::Column::TotalMatchesPlayed,
                Expr::col(entity::player::Column::TotalMatchesPlayed).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Zeroes every player's running totals.
    ///
    /// Match and stat rows are left untouched; only the leaderboard accumulator
    /// columns reset.
    ///
    /// # Returns
    /// - `Ok(())` - All totals reset
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_totals(&self) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::TotalScore, Expr::value(0.0))
            .col_expr(entity::player::Column::TotalKills, Expr::value(0))
            .col_expr(entity::player::Column::TotalAssists, Expr::value(0))
            .col_expr(entity::player::Column::TotalDamage, Expr::value(0.0))
            .col_expr(entity::player::Column::TotalMatchesPlayed, Expr::value(0))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Returns the top players ordered by total score descending.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of players to return
    ///
    /// # Returns
    /// - `Ok(Vec<Player>)` - Up to `limit` players, best first
    /// - `Err(DbErr)` - Database error during query
    pub async fn top_by_score(&self, limit: u64) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::TotalScore)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }
}
