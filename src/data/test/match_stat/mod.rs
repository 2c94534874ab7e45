use crate::data::match_stat::MatchStatRepository;
use crate::model::stats::CreateMatchStatParam;
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;
use test_utils::factory::match_record::MatchRecordFactory;
use test_utils::factory::player::PlayerFactory;

mod create;
