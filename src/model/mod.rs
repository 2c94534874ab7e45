//! Domain models and operation-specific parameter types.
//!
//! Models here are owned by the application rather than by the database or the PUBG
//! API: leaderboard players converted from entities at the repository boundary,
//! scored teams derived per report, and the mutable subscription state owned by the
//! poller.

pub mod player;
pub mod report;
pub mod stats;
pub mod subscription;
pub mod voice;
