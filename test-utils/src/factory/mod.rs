//! Factories for creating test entities with sensible defaults.

pub mod helpers;
pub mod match_record;
pub mod player;
