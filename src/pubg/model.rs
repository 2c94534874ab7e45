//! Typed models for PUBG API payloads.
//!
//! The PUBG API speaks JSON:API: a `data` resource plus a flat `included` collection
//! of participants, rosters, and assets that reference each other by id. These
//! structs deserialize only the fields the bot consumes; everything else in the
//! payload is ignored. Payloads are validated once at fetch time (`validate`) so the
//! scoring code never has to guard against a zero match duration.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::error::pubg::PubgError;

/// The only match type the bot reports.
pub const CUSTOM_MATCH_TYPE: &str = "custom";

/// Full match payload: the match resource plus its included participants and rosters.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchResponse {
    pub data: MatchResource,
    #[serde(default)]
    pub included: Vec<Included>,
}

impl MatchResponse {
    /// Iterates over the participants in the `included` collection.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.included.iter().filter_map(|item| match item {
            Included::Participant(p) => Some(p),
            _ => None,
        })
    }

    /// Iterates over the rosters in the `included` collection.
    pub fn rosters(&self) -> impl Iterator<Item = &Roster> {
        self.included.iter().filter_map(|item| match item {
            Included::Roster(r) => Some(r),
            _ => None,
        })
    }

    /// Validates invariants the rest of the application relies on.
    ///
    /// # Returns
    /// - `Ok(())` - Payload is safe to score and persist
    /// - `Err(PubgError::InvalidPayload)` - Non-positive match duration
    pub fn validate(&self) -> Result<(), PubgError> {
        if self.data.attributes.duration <= 0 {
            return Err(PubgError::InvalidPayload {
                match_id: self.data.id.clone(),
                reason: format!(
                    "non-positive match duration {}",
                    self.data.attributes.duration
                ),
            });
        }

        Ok(())
    }
}

/// The match resource itself.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchResource {
    pub id: String,
    pub attributes: MatchAttributes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAttributes {
    pub created_at: DateTime<Utc>,
    /// Match duration in seconds.
    pub duration: i64,
    pub match_type: String,
    pub map_name: String,
    #[serde(default)]
    pub game_mode: String,
}

impl MatchAttributes {
    /// Whether this is a privately organized custom match.
    pub fn is_custom(&self) -> bool {
        self.match_type == CUSTOM_MATCH_TYPE
    }

    /// Instant the match concluded: creation time plus duration.
    pub fn ended_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.duration)
    }
}

/// An entity from the `included` collection, tagged by its `type` field.
///
/// Assets and any resource types added to the API later fall into `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Included {
    Participant(Participant),
    Roster(Roster),
    #[serde(other)]
    Other,
}

/// One player's appearance in one match.
#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub id: String,
    pub attributes: ParticipantAttributes,
}

impl Participant {
    pub fn stats(&self) -> &ParticipantStats {
        &self.attributes.stats
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantAttributes {
    pub stats: ParticipantStats,
}

/// Raw per-player counters as reported by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub name: String,
    /// External PUBG account id. Occasionally absent for bot fill players.
    #[serde(default)]
    pub player_id: String,
    pub kills: u32,
    pub assists: u32,
    pub damage_dealt: f64,
    /// Seconds survived before death or match end.
    pub time_survived: f64,
    /// The player's own final placement, 1-based.
    pub win_place: u32,
}

/// A team grouping within a match.
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    pub id: String,
    pub attributes: RosterAttributes,
    pub relationships: RosterRelationships,
}

impl Roster {
    pub fn rank(&self) -> u32 {
        self.attributes.stats.rank
    }

    pub fn team_id(&self) -> u32 {
        self.attributes.stats.team_id
    }

    /// The API encodes the winner flag as the string "true"/"false".
    pub fn won(&self) -> bool {
        self.attributes.won == "true"
    }

    /// Ids of the participants on this roster.
    pub fn participant_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .participants
            .data
            .iter()
            .map(|r| r.id.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterAttributes {
    pub stats: RosterStats,
    #[serde(default)]
    pub won: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    /// Final placement rank of the team, 1-based.
    pub rank: u32,
    pub team_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterRelationships {
    pub participants: ResourceRefs,
}

/// A list of `{ type, id }` references to included resources.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRefs {
    pub data: Vec<ResourceRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub id: String,
}

/// Response from the players index endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerIndexResponse {
    pub data: Vec<PlayerResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerResource {
    pub id: String,
    pub relationships: PlayerRelationships,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRelationships {
    pub matches: ResourceRefs,
}
