use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250315_000001_create_player_table::Player;
use crate::m20250315_000002_create_match_record_table::MatchRecord;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchStat::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchStat::Id))
                    .col(string(MatchStat::MatchId))
                    .col(string(MatchStat::PlayerId))
                    .col(integer(MatchStat::Kills).default(0))
                    .col(integer(MatchStat::Assists).default(0))
                    .col(double(MatchStat::Damage).default(0.0))
                    .col(double(MatchStat::TimeSurvived).default(0.0))
                    .col(integer(MatchStat::Rank).default(0))
                    .col(double(MatchStat::Score).default(0.0))
                    .col(timestamp_with_time_zone(MatchStat::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_stat_match_id")
                            .from(MatchStat::Table, MatchStat::MatchId)
                            .to(MatchRecord::Table, MatchRecord::MatchId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_stat_player_id")
                            .from(MatchStat::Table, MatchStat::PlayerId)
                            .to(Player::Table, Player::PubgId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum MatchStat {
    Table,
    Id,
    MatchId,
    PlayerId,
    Kills,
    Assists,
    Damage,
    TimeSurvived,
    Rank,
    Score,
    CreatedAt,
}
