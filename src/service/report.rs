//! Webhook publishing of match reports and leaderboards.
//!
//! Reports are rich embeds posted through a configured Discord webhook: one embed
//! per team, podium-colored, with the match MVP crowned, followed by the refreshed
//! top-10 leaderboard. Discord caps embeds at ten per message, so embed lists are
//! chunked before posting.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, ExecuteWebhook, Webhook};
use serenity::http::Http;

use crate::data::player::PlayerRepository;
use crate::error::AppError;
use crate::model::player::Player;
use crate::model::report::Team;
use crate::pubg::model::{MatchResponse, Participant};
use crate::pubg::MatchLookup;
use crate::service::scoring;
use crate::service::stats::StatsService;
use crate::service::subscription::ReportSink;

/// Discord allows at most ten embeds per webhook message.
const EMBEDS_PER_MESSAGE: usize = 10;

/// How many players the published leaderboard shows.
const LEADERBOARD_SIZE: u64 = 10;

const PODIUM_COLORS: [u32; 3] = [0xFF0000, 0xFFA500, 0xFFFF00];
const TEAM_COLOR: u32 = 0x00FFFF;
const GOLD: u32 = 0xFFD700;
const CYAN: u32 = 0x00FFFF;

const MATCH_WEBHOOK_NAME: &str = "PUBG Match Stats";
const LEADERBOARD_WEBHOOK_NAME: &str = "Top Players";

/// Service publishing match reports and leaderboards to Discord.
pub struct ReportService {
    db: DatabaseConnection,
    http: Arc<Http>,
    webhook_url: String,
    stats: StatsService,
}

impl ReportService {
    /// Creates a new ReportService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for leaderboard queries
    /// - `http` - Discord HTTP client for webhook execution and channel notices
    /// - `webhook_url` - Webhook the reports are posted through
    /// - `lookup` - Match-lookup collaborator, forwarded to stats recording
    pub fn new(
        db: DatabaseConnection,
        http: Arc<Http>,
        webhook_url: String,
        lookup: Arc<dyn MatchLookup>,
    ) -> Self {
        let stats = StatsService::new(db.clone(), lookup);

        Self {
            db,
            http,
            webhook_url,
            stats,
        }
    }

    /// Publishes a full match report and updates the stored statistics.
    ///
    /// Builds scored teams, posts one embed per team (rank order, MVP crowned),
    /// persists the match, then publishes the refreshed leaderboard.
    ///
    /// # Arguments
    /// - `payload` - A validated match payload
    ///
    /// # Returns
    /// - `Ok(())` - Report posted and recorded
    /// - `Err(AppError)` - Webhook or database failure
    pub async fn report_match(&self, payload: &MatchResponse) -> Result<(), AppError> {
        let mut teams = scoring::build_teams(payload);
        teams.sort_by_key(Team::rank);
        let mvp = scoring::match_mvp(payload);

        let embeds = team_embeds(&teams, mvp);
        self.execute_webhook(MATCH_WEBHOOK_NAME, embeds).await?;

        self.stats.record_match(payload, &teams).await?;
        self.publish_leaderboard().await?;

        Ok(())
    }

    /// Publishes the current top-10 leaderboard through the webhook.
    ///
    /// Does nothing when no players are tracked yet.
    ///
    /// # Returns
    /// - `Ok(())` - Leaderboard posted (or empty and skipped)
    /// - `Err(AppError)` - Webhook or database failure
    pub async fn publish_leaderboard(&self) -> Result<(), AppError> {
        let players = PlayerRepository::new(&self.db)
            .top_by_score(LEADERBOARD_SIZE)
            .await?;

        if players.is_empty() {
            tracing::debug!("No players on the leaderboard yet");
            return Ok(());
        }

        self.execute_webhook(LEADERBOARD_WEBHOOK_NAME, leaderboard_embeds(&players))
            .await
    }

    async fn execute_webhook(
        &self,
        username: &str,
        embeds: Vec<CreateEmbed>,
    ) -> Result<(), AppError> {
        let webhook = Webhook::from_url(&self.http, &self.webhook_url).await?;

        for chunk in embeds.chunks(EMBEDS_PER_MESSAGE) {
            webhook
                .execute(
                    &self.http,
                    false,
                    ExecuteWebhook::new()
                        .username(username)
                        .embeds(chunk.to_vec()),
                )
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl ReportSink for ReportService {
    async fn publish_match(&self, payload: &MatchResponse) -> Result<(), AppError> {
        self.report_match(payload).await
    }

    async fn notify(&self, channel_id: u64, text: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id).say(&self.http, text).await?;
        Ok(())
    }
}

/// Builds one embed per team, in the given (rank-sorted) order.
fn team_embeds(teams: &[Team], mvp: Option<&Participant>) -> Vec<CreateEmbed> {
    teams
        .iter()
        .enumerate()
        .map(|(index, team)| {
            let mut fields: Vec<(String, String, bool)> = team
                .players
                .iter()
                .map(|player| {
                    let stats = player.participant.stats();
                    let mut name = stats.name.clone();
                    if mvp.is_some_and(|m| m.id == player.participant.id) {
                        name.push_str("  (\u{1F451}MVP)");
                    }

                    (
                        name,
                        format!(
                            "Kills: {}\nDamage: {}\nAssists: {}",
                            stats.kills,
                            stats.damage_dealt.round(),
                            stats.assists
                        ),
                        true,
                    )
                })
                .collect();

            if fields.is_empty() {
                fields.push((
                    "No Players".to_string(),
                    "This team has no players.".to_string(),
                    true,
                ));
            }

            let winner_line = if team.roster.won() {
                "\u{1F3C6} Winner!\n"
            } else {
                ""
            };

            CreateEmbed::new()
                .title(format!(
                    "Team #{} - Rank: {}",
                    team.roster.team_id(),
                    team.rank()
                ))
                .description(format!(
                    "{}**Total Kills:** {}",
                    winner_line,
                    team.total_kills()
                ))
                .fields(fields)
                .color(PODIUM_COLORS.get(index).copied().unwrap_or(TEAM_COLOR))
        })
        .collect()
}

/// Builds one embed per leaderboard entry, best first.
fn leaderboard_embeds(players: &[Player]) -> Vec<CreateEmbed> {
    players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            CreateEmbed::new()
                .title(format!("#{} - {}", index + 1, player.username))
                .description(format!(
                    "**Total Score:** {:.1}\n**Kills:** {} | **Assists:** {} | **Damage:** {}",
                    player.total_score,
                    player.total_kills,
                    player.total_assists,
                    player.total_damage.round()
                ))
                .color(if index == 0 { GOLD } else { CYAN })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::scoring::build_teams;
    use test_utils::fixture::match_payload::{custom_match_payload, MatchPayloadParams};

    fn sorted_teams(payload: &MatchResponse) -> Vec<Team> {
        let mut teams = build_teams(payload);
        teams.sort_by_key(Team::rank);
        teams
    }

    /// Tests that the team embeds carry the winner line, MVP crown, and podium
    /// colors in rank order.
    #[test]
    fn team_embeds_mark_winner_and_mvp() {
        let payload: MatchResponse =
            serde_json::from_value(custom_match_payload(&MatchPayloadParams::default())).unwrap();
        let teams = sorted_teams(&payload);
        let mvp = scoring::match_mvp(&payload);

        let embeds = team_embeds(&teams, mvp);
        assert_eq!(embeds.len(), 2);

        let first = serde_json::to_value(&embeds[0]).unwrap();
        assert_eq!(first["color"], 0xFF0000);
        assert!(first["description"]
            .as_str()
            .unwrap()
            .contains("Winner!"));
        assert!(first["fields"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f["name"].as_str().unwrap().contains("MVP")));

        let second = serde_json::to_value(&embeds[1]).unwrap();
        assert_eq!(second["color"], 0xFFA500);
        assert!(!second["description"].as_str().unwrap().contains("Winner!"));
    }

    /// Tests that an empty team renders the placeholder field instead of none.
    #[test]
    fn team_embeds_placeholder_for_empty_team() {
        let params = MatchPayloadParams {
            empty_roster: true,
            ..MatchPayloadParams::default()
        };
        let payload: MatchResponse =
            serde_json::from_value(custom_match_payload(&params)).unwrap();
        let teams = sorted_teams(&payload);

        let embeds = team_embeds(&teams, None);
        let empty = embeds
            .iter()
            .map(|e| serde_json::to_value(e).unwrap())
            .find(|v| v["fields"][0]["name"] == "No Players");
        assert!(empty.is_some());
    }

    /// Tests leaderboard embed ordering and colors: gold for first, cyan after.
    #[test]
    fn leaderboard_embeds_rank_and_color() {
        let players = vec![
            Player {
                pubg_id: "account.1".to_string(),
                username: "first".to_string(),
                total_score: 99.5,
                total_kills: 30,
                total_assists: 10,
                total_damage: 4200.0,
                total_matches_played: 5,
            },
            Player {
                pubg_id: "account.2".to_string(),
                username: "second".to_string(),
                total_score: 50.0,
                total_kills: 12,
                total_assists: 3,
                total_damage: 1800.0,
                total_matches_played: 5,
            },
        ];

        let embeds = leaderboard_embeds(&players);
        assert_eq!(embeds.len(), 2);

        let first = serde_json::to_value(&embeds[0]).unwrap();
        assert_eq!(first["title"], "#1 - first");
        assert_eq!(first["color"], 0xFFD700);

        let second = serde_json::to_value(&embeds[1]).unwrap();
        assert_eq!(second["title"], "#2 - second");
        assert_eq!(second["color"], 0x00FFFF);
    }
}
