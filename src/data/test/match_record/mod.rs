use crate::data::match_record::MatchRecordRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod find_or_create;
