use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VoiceActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(VoiceActivity::Id))
                    .col(string_uniq(VoiceActivity::SessionId))
                    .col(string(VoiceActivity::GuildId))
                    .col(string(VoiceActivity::ChannelId))
                    .col(string(VoiceActivity::UserId))
                    .col(big_integer(VoiceActivity::DurationSeconds))
                    .col(timestamp_with_time_zone(VoiceActivity::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VoiceActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum VoiceActivity {
    Table,
    Id,
    SessionId,
    GuildId,
    ChannelId,
    UserId,
    DurationSeconds,
    CreatedAt,
}
