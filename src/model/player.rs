//! Player domain model and totals parameters.

/// A tracked player with their running leaderboard totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// External PUBG account id.
    pub pubg_id: String,
    /// PUBG display name.
    pub username: String,
    pub total_score: f64,
    pub total_kills: i32,
    pub total_assists: i32,
    pub total_damage: f64,
    pub total_matches_played: i32,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            pubg_id: entity.pubg_id,
            username: entity.username,
            total_score: entity.total_score,
            total_kills: entity.total_kills,
            total_assists: entity.total_assists,
            total_damage: entity.total_damage,
            total_matches_played: entity.total_matches_played,
        }
    }
}

/// One match's contribution to a player's running totals.
///
/// Applied as a single atomic increment; `total_matches_played` advances by one
/// per application.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchTotalsParam {
    pub score: f64,
    pub kills: i32,
    pub assists: i32,
    pub damage: f64,
}
