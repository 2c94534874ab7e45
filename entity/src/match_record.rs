use sea_orm::entity::prelude::*;

/// A reported custom match, keyed by the external PUBG match id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub match_id: String,
    pub map_name: String,
    /// Match duration in seconds.
    pub duration: i64,
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
