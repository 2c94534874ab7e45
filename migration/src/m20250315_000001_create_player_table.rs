use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(string(Player::PubgId).primary_key())
                    .col(string_uniq(Player::Username))
                    .col(double(Player::TotalScore).default(0.0))
                    .col(integer(Player::TotalKills).default(0))
                    .col(integer(Player::TotalAssists).default(0))
                    .col(double(Player::TotalDamage).default(0.0))
                    .col(integer(Player::TotalMatchesPlayed).default(0))
                    .col(timestamp_with_time_zone(Player::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Player {
    Table,
    PubgId,
    Username,
    TotalScore,
    TotalKills,
    TotalAssists,
    TotalDamage,
    TotalMatchesPlayed,
    CreatedAt,
}
