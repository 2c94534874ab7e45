//! Derived report models: scored participants grouped into teams.

use crate::pubg::model::{Participant, Roster};

/// A participant annotated with their computed MVP score.
///
/// The score is derived per report and never stored on its own; persistence keeps
/// it alongside the raw counters in a match-stat row.
#[derive(Debug, Clone)]
pub struct ScoredPlayer {
    pub participant: Participant,
    pub mvp_score: f64,
}

/// A roster paired with its resolved, scored players.
#[derive(Debug, Clone)]
pub struct Team {
    pub roster: Roster,
    pub players: Vec<ScoredPlayer>,
}

impl Team {
    /// Final placement rank of this team, 1-based.
    pub fn rank(&self) -> u32 {
        self.roster.rank()
    }

    /// Sum of kills across the team's resolved players.
    pub fn total_kills(&self) -> u32 {
        self.players
            .iter()
            .map(|p| p.participant.stats().kills)
            .sum()
    }
}
