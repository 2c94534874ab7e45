//! Parameter types for persisting match statistics.

/// Parameters for inserting one player's stat line for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMatchStatParam {
    pub match_id: String,
    pub player_id: String,
    pub kills: i32,
    pub assists: i32,
    pub damage: f64,
    pub time_survived: f64,
    /// Final placement rank of the player's roster.
    pub rank: i32,
    pub score: f64,
}
