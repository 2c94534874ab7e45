//! Canned PUBG match payloads with tweakable edge cases.
//!
//! The default payload is a small custom match: two rosters of two players each,
//! plus an asset entity to exercise unknown-type handling. Edge-case flags bend the
//! payload into the shapes the classifier, aggregator, and persistence tests need.

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

/// Parameters controlling the generated match payload.
pub struct MatchPayloadParams {
    pub match_id: String,
    pub match_type: String,
    /// RFC 3339 creation timestamp. Defaults to now so the match ends in the
    /// future relative to a test that subscribes first.
    pub created_at: String,
    /// Match duration in seconds.
    pub duration: i64,
    pub map_name: String,
    /// Adds a roster reference to "participant-99", which has no participant
    /// record in the payload.
    pub dangling_participant_ref: bool,
    /// Gives every participant an identical stat line at win place 1.
    pub identical_stats: bool,
    /// Empties the `included` collection entirely.
    pub empty_included: bool,
    /// Adds a third roster with no participants.
    pub empty_roster: bool,
    /// Blanks the last participant's playerId.
    pub missing_player_id: bool,
}

impl Default for MatchPayloadParams {
    fn default() -> Self {
        Self {
            match_id: "match-1".to_string(),
            match_type: "custom".to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            duration: 1200,
            map_name: "Erangel_Main".to_string(),
            dangling_participant_ref: false,
            identical_stats: false,
            empty_included: false,
            empty_roster: false,
            missing_player_id: false,
        }
    }
}

fn participant(index: u32, stats: Value) -> Value {
    json!({
        "type": "participant",
        "id": format!("participant-{}", index),
        "attributes": { "stats": stats }
    })
}

fn stats(
    name: &str,
    player_id: &str,
    kills: u32,
    assists: u32,
    damage: f64,
    time_survived: f64,
    win_place: u32,
) -> Value {
    json!({
        "name": name,
        "playerId": player_id,
        "kills": kills,
        "assists": assists,
        "damageDealt": damage,
        "timeSurvived": time_survived,
        "winPlace": win_place
    })
}

fn roster(index: u32, rank: u32, won: bool, participant_ids: &[&str]) -> Value {
    let refs: Vec<Value> = participant_ids
        .iter()
        .map(|id| json!({ "type": "participant", "id": id }))
        .collect();

    json!({
        "type": "roster",
        "id": format!("roster-{}", index),
        "attributes": {
            "stats": { "rank": rank, "teamId": index },
            "won": if won { "true" } else { "false" }
        },
        "relationships": {
            "participants": { "data": refs }
        }
    })
}

/// Builds a full match payload as raw JSON.
///
/// Deserialize it through the application's payload types:
///
/// ```rust,ignore
/// let payload: MatchResponse =
///     serde_json::from_value(custom_match_payload(&MatchPayloadParams::default()))?;
/// ```
pub fn custom_match_payload(params: &MatchPayloadParams) -> Value {
    let mut included = Vec::new();

    if !params.empty_included {
        let lines = if params.identical_stats {
            vec![
                stats("Player1", "account.p1", 5, 2, 300.0, 600.0, 1),
                stats("Player2", "account.p2", 5, 2, 300.0, 600.0, 1),
                stats("Player3", "account.p3", 5, 2, 300.0, 600.0, 1),
                stats("Player4", "account.p4", 5, 2, 300.0, 600.0, 1),
            ]
        } else {
            let last_player_id = if params.missing_player_id {
                ""
            } else {
                "account.p4"
            };

            vec![
                stats("Player1", "account.p1", 5, 2, 300.0, 600.0, 1),
                stats("Player2", "account.p2", 2, 1, 150.0, 600.0, 1),
                stats("Player3", "account.p3", 1, 0, 90.0, 400.0, 2),
                stats("Player4", last_player_id, 0, 1, 40.0, 300.0, 2),
            ]
        };

        for (index, line) in lines.into_iter().enumerate() {
            included.push(participant(index as u32 + 1, line));
        }

        let mut first_team: Vec<&str> = vec!["participant-1", "participant-2"];
        if params.dangling_participant_ref {
            first_team.push("participant-99");
        }

        included.push(roster(1, 1, true, &first_team));
        included.push(roster(2, 2, false, &["participant-3", "participant-4"]));

        if params.empty_roster {
            included.push(roster(3, 3, false, &[]));
        }

        included.push(json!({
            "type": "asset",
            "id": "asset-1",
            "attributes": { "name": "telemetry", "URL": "https://telemetry.example" }
        }));
    }

    json!({
        "data": {
            "type": "match",
            "id": params.match_id,
            "attributes": {
                "createdAt": params.created_at,
                "duration": params.duration,
                "matchType": params.match_type,
                "mapName": params.map_name,
                "gameMode": "squad"
            }
        },
        "included": included
    })
}
