use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord gateway client with the configured event handler.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `handler` - Event handler wired with the bot's services
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, handler: Handler) -> Result<Client, AppError> {
    // What events the bot will receive from the gateway
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner.
///
/// Blocks until the bot shuts down, so this is the last call on the main task.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
