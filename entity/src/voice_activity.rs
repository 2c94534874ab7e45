use sea_orm::entity::prelude::*;

/// A completed voice-channel session for one guild member.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "voice_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Random session id assigned when the member joined the channel.
    #[sea_orm(unique)]
    pub session_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub duration_seconds: i64,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
