//! Slash-command definitions and name dispatch.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

/// The bot's slash commands as a tagged enum.
///
/// Dispatch goes through this enum rather than string matches spread across
/// handlers, so an unknown name is rejected in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Subscribe,
    Unsubscribe,
    Get,
    GetId,
    Reset,
    Leaderboard,
}

impl SlashCommand {
    /// Parses a command interaction name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "subscribe" => Some(Self::Subscribe),
            "unsubscribe" => Some(Self::Unsubscribe),
            "get" => Some(Self::Get),
            "get_id" => Some(Self::GetId),
            "reset" => Some(Self::Reset),
            "leaderboard" => Some(Self::Leaderboard),
            _ => None,
        }
    }
}

/// Builds the global command registrations sent to Discord on ready.
pub fn registrations() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("subscribe")
            .description("Subscribe this channel to a player's custom matches")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "PUBG name of the player to watch",
                )
                .required(true),
            ),
        CreateCommand::new("unsubscribe").description("Unsubscribe this channel from match updates"),
        CreateCommand::new("get")
            .description("Report the player's most recent custom match")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "PUBG name of the player",
                )
                .required(true),
            ),
        CreateCommand::new("get_id")
            .description("Report a custom match by its match id")
            .add_option(
                CreateCommandOption::new(CommandOptionType::String, "id", "PUBG match id")
                    .required(true),
            ),
        CreateCommand::new("reset").description("Reset all leaderboard totals"),
        CreateCommand::new("leaderboard").description("Publish the current leaderboard"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that every registered command name parses back to its variant.
    #[test]
    fn registrations_and_dispatch_agree() {
        for (name, expected) in [
            ("subscribe", SlashCommand::Subscribe),
            ("unsubscribe", SlashCommand::Unsubscribe),
            ("get", SlashCommand::Get),
            ("get_id", SlashCommand::GetId),
            ("reset", SlashCommand::Reset),
            ("leaderboard", SlashCommand::Leaderboard),
        ] {
            assert_eq!(SlashCommand::from_name(name), Some(expected));
        }

        assert_eq!(registrations().len(), 6);
        assert_eq!(SlashCommand::from_name("unknown"), None);
    }
}
