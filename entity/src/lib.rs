pub mod match_record;
pub mod match_stat;
pub mod player;
pub mod voice_activity;

pub mod prelude {
    pub use super::match_record::Entity as MatchRecord;
    pub use super::match_stat::Entity as MatchStat;
    pub use super::player::Entity as Player;
    pub use super::voice_activity::Entity as VoiceActivity;
}
