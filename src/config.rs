use url::Url;

use crate::error::{config::ConfigError, AppError};

const PUBG_API_BASE_URL: &str = "https://api.pubg.com/shards/steam";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub webhook_url: String,

    pub pubg_api_key: String,
    pub pubg_api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let webhook_url = std::env::var("WEBHOOK_URL")
            .map_err(|_| ConfigError::MissingEnvVar("WEBHOOK_URL".to_string()))?;

        // Fail at startup on a bad webhook URL instead of on the first report.
        Url::parse(&webhook_url).map_err(|source| ConfigError::InvalidWebhookUrl {
            value: webhook_url.clone(),
            source,
        })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            webhook_url,
            pubg_api_key: std::env::var("PUBG_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("PUBG_API_KEY".to_string()))?,
            pubg_api_base_url: PUBG_API_BASE_URL.to_string(),
        })
    }
}
