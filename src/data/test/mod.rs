mod match_record;
mod match_stat;
mod player;
mod voice_activity;
