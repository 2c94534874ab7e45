//! MVP scoring and team aggregation.
//!
//! The MVP score is this bot's own metric, not provided by the PUBG API: a weighted
//! sum of a player's kills, assists, damage, normalized survival time, and a bonus
//! for their team's placement. Everything here is pure; callers fetch the payload
//! and decide what to do with the scores.

use std::collections::HashMap;

use crate::model::report::{ScoredPlayer, Team};
use crate::pubg::model::{MatchResponse, Participant, ParticipantStats};

const KILL_WEIGHT: f64 = 3.0;
const ASSIST_WEIGHT: f64 = 1.0;
const DAMAGE_WEIGHT: f64 = 0.01;
const SURVIVAL_WEIGHT: f64 = 0.5;
const RANK_WEIGHT: f64 = 10.0;

/// Computes a player's MVP score for one match.
///
/// Survival time is normalized by the match duration so long and short matches
/// weigh survival equally. The rank bonus is 1.0 for first place, scaling down to
/// `1/total_teams` for last place, clamped so it can never go negative.
///
/// # Arguments
/// - `stats` - The player's raw counters for the match
/// - `team_rank` - 1-based placement used for the rank bonus
/// - `match_duration_secs` - Match duration in seconds; validated positive at the
///   API boundary
/// - `total_teams` - Number of rosters in the match
pub fn mvp_score(
    stats: &ParticipantStats,
    team_rank: u32,
    match_duration_secs: i64,
    total_teams: usize,
) -> f64 {
    let survival = stats.time_survived / match_duration_secs as f64;
    let rank_bonus =
        ((total_teams as f64 - f64::from(team_rank) + 1.0) / total_teams as f64).max(0.0);

    KILL_WEIGHT * f64::from(stats.kills)
        + ASSIST_WEIGHT * f64::from(stats.assists)
        + DAMAGE_WEIGHT * stats.damage_dealt
        + SURVIVAL_WEIGHT * survival
        + RANK_WEIGHT * rank_bonus
}

/// Groups a match's participants into scored teams.
///
/// Resolves each roster's participant ids against the included participants and
/// scores every resolved player with the roster's rank. Ids that reference a
/// missing participant record are dropped, not errors. Output order follows the
/// payload; display code sorts by rank.
pub fn build_teams(payload: &MatchResponse) -> Vec<Team> {
    let participants: HashMap<&str, &Participant> = payload
        .participants()
        .map(|p| (p.id.as_str(), p))
        .collect();
    let total_teams = payload.rosters().count();
    let duration = payload.data.attributes.duration;

    payload
        .rosters()
        .map(|roster| {
            let players = roster
                .participant_ids()
                .filter_map(|id| participants.get(id))
                .map(|participant| ScoredPlayer {
                    participant: (*participant).clone(),
                    mvp_score: mvp_score(
                        participant.stats(),
                        roster.rank(),
                        duration,
                        total_teams,
                    ),
                })
                .collect();

            Team {
                roster: roster.clone(),
                players,
            }
        })
        .collect()
}

/// Picks the overall match MVP.
///
/// Scans the full participant set, scoring each player with their own final
/// placement (`win_place`) rather than the roster rank, and returns the strictly
/// highest scorer. Ties keep the first participant encountered.
pub fn match_mvp(payload: &MatchResponse) -> Option<&Participant> {
    let total_teams = payload.rosters().count();
    let duration = payload.data.attributes.duration;

    let mut best: Option<(&Participant, f64)> = None;
    for participant in payload.participants() {
        let score = mvp_score(
            participant.stats(),
            participant.stats().win_place,
            duration,
            total_teams,
        );

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((participant, score)),
        }
    }

    best.map(|(participant, _)| participant)
}
