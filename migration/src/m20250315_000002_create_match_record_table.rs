use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchRecord::Table)
                    .if_not_exists()
                    .col(string(MatchRecord::MatchId).primary_key())
                    .col(string(MatchRecord::MapName))
                    .col(big_integer(MatchRecord::Duration))
                    .col(timestamp_with_time_zone(MatchRecord::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum MatchRecord {
    Table,
    MatchId,
    MapName,
    Duration,
    CreatedAt,
}
