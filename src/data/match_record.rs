//! Match record data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for reported matches.
pub struct MatchRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchRecordRepository<'a> {
    /// Creates a new MatchRecordRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a match row if one does not already exist for the id.
    ///
    /// A match can be reported through multiple paths (poller, get commands), so
    /// the insert is idempotent on the match id.
    ///
    /// # Arguments
    /// - `match_id` - External PUBG match id
    /// - `map_name` - Map the match was played on
    /// - `duration` - Match duration in seconds
    ///
    /// # Returns
    /// - `Ok(true)` - Row created
    /// - `Ok(false)` - Row already existed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn find_or_create(
        &self,
        match_id: &str,
        map_name: &str,
        duration: i64,
    ) -> Result<bool, DbErr> {
        let existing = entity::prelude::MatchRecord::find_by_id(match_id)
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        let entity = entity::match_record::ActiveModel {
            match_id: ActiveValue::Set(match_id.to_string()),
            map_name: ActiveValue::Set(map_name.to_string()),
            duration: ActiveValue::Set(duration),
            created_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::MatchRecord::insert(entity)
            .exec(self.db)
            .await?;

        Ok(true)
    }
}
