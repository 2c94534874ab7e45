pub use sea_orm_migration::prelude::*;

mod m20250315_000001_create_player_table;
mod m20250315_000002_create_match_record_table;
mod m20250315_000003_create_match_stat_table;
mod m20250318_000004_create_voice_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250315_000001_create_player_table::Migration),
            Box::new(m20250315_000002_create_match_record_table::Migration),
            Box::new(m20250315_000003_create_match_stat_table::Migration),
            Box::new(m20250318_000004_create_voice_activity_table::Migration),
        ]
    }
}
