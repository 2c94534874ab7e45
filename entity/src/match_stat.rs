use sea_orm::entity::prelude::*;

/// One player's performance line in one reported match.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: String,
    pub player_id: String,
    pub kills: i32,
    pub assists: i32,
    pub damage: f64,
    /// Seconds survived before death or match end.
    pub time_survived: f64,
    /// Final placement rank of the player's roster.
    pub rank: i32,
    pub score: f64,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_record::Entity",
        from = "Column::MatchId",
        to = "super::match_record::Column::MatchId"
    )]
    MatchRecord,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::PubgId"
    )]
    Player,
}

impl Related<super::match_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchRecord.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
