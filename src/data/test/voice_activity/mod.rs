use crate::data::voice_activity::VoiceActivityRepository;
use crate::model::voice::CreateVoiceActivityParam;
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod create;
