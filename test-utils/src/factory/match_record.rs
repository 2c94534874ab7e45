//! Match record factory for creating test match entities.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::factory::helpers::next_id;

/// Factory for creating test match records with customizable fields.
pub struct MatchRecordFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: String,
    map_name: String,
    duration: i64,
}

impl<'a> MatchRecordFactory<'a> {
    /// Creates a new MatchRecordFactory with default values.
    ///
    /// Defaults:
    /// - match_id: `"match-{id}"` where id is auto-incremented
    /// - map_name: `"Erangel_Main"`
    /// - duration: 1800 seconds
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            match_id: format!("match-{}", id),
            map_name: "Erangel_Main".to_string(),
            duration: 1800,
        }
    }

    pub fn match_id(mut self, match_id: impl Into<String>) -> Self {
        self.match_id = match_id.into();
        self
    }

    pub fn map_name(mut self, map_name: impl Into<String>) -> Self {
        self.map_name = map_name.into();
        self
    }

    pub fn duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Inserts the match record and returns the created entity.
    pub async fn build(self) -> Result<entity::match_record::Model, DbErr> {
        let model = entity::match_record::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            map_name: ActiveValue::Set(self.map_name),
            duration: ActiveValue::Set(self.duration),
            created_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::MatchRecord::insert(model)
            .exec_with_returning(self.db)
            .await
    }
}
