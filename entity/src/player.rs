use sea_orm::entity::prelude::*;

/// Tracked PUBG player with running leaderboard totals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    /// External PUBG account id (`account.<hash>`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub pubg_id: String,
    #[sea_orm(unique)]
    pub username: String,
    pub total_score: f64,
    pub total_kills: i32,
    pub total_assists: i32,
    pub total_damage: f64,
    pub total_matches_played: i32,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_stat::Entity")]
    MatchStat,
}

impl Related<super::match_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
