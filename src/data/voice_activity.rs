//! Voice activity data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::voice::CreateVoiceActivityParam;

/// Repository providing database operations for voice-channel sessions.
pub struct VoiceActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoiceActivityRepository<'a> {
    /// Creates a new VoiceActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists one completed voice-channel session.
    ///
    /// # Arguments
    /// - `param` - Session parameters including duration in seconds
    ///
    /// # Returns
    /// - `Ok(())` - Session recorded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateVoiceActivityParam) -> Result<(), DbErr> {
        let entity = entity::voice_activity::ActiveModel {
            session_id: ActiveValue::Set(param.session_id),
            guild_id: ActiveValue::Set(param.guild_id),
            channel_id: ActiveValue::Set(param.channel_id),
            user_id: ActiveValue::Set(param.user_id),
            duration_seconds: ActiveValue::Set(param.duration_seconds),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        entity::prelude::VoiceActivity::insert(entity)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
