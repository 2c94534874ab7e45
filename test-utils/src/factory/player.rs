//! Player factory for creating test player entities.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::factory::helpers::next_id;

/// Factory for creating test players with customizable fields.
///
/// Provides a builder pattern for creating player entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .username("Sniper")
///     .total_score(42.5)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    pubg_id: String,
    username: String,
    total_score: f64,
    total_kills: i32,
    total_assists: i32,
    total_damage: f64,
    total_matches_played: i32,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - pubg_id: `"account.{id}"` where id is auto-incremented
    /// - username: `"Player {id}"`
    /// - all totals: zero
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            pubg_id: format!("account.{}", id),
            username: format!("Player {}", id),
            total_score: 0.0,
            total_kills: 0,
            total_assists: 0,
            total_damage: 0.0,
            total_matches_played: 0,
        }
    }

    pub fn pubg_id(mut self, pubg_id: impl Into<String>) -> Self {
        self.pubg_id = pubg_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn total_score(mut self, total_score: f64) -> Self {
        self.total_score = total_score;
        self
    }

    pub fn total_kills(mut self, total_kills: i32) -> Self {
        self.total_kills = total_kills;
        self
    }

    pub fn total_matches_played(mut self, total_matches_played: i32) -> Self {
        self.total_matches_played = total_matches_played;
        self
    }

    /// Inserts the player and returns the created entity.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let model = entity::player::ActiveModel {
            pubg_id: ActiveValue::Set(self.pubg_id),
            username: ActiveValue::Set(self.username),
            total_score: ActiveValue::Set(self.total_score),
            total_kills: ActiveValue::Set(self.total_kills),
            total_assists: ActiveValue::Set(self.total_assists),
            total_damage: ActiveValue::Set(self.total_damage),
            total_matches_played: ActiveValue::Set(self.total_matches_played),
            created_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::Player::insert(model)
            .exec_with_returning(self.db)
            .await
    }
}
