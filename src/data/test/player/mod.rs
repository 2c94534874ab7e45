use crate::data::player::PlayerRepository;
use crate::model::player::MatchTotalsParam;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::player::PlayerFactory;

mod add_match_totals;
mod find_or_create;
mod reset_totals;
mod top_by_score;
