//! Ready event handler for bot initialization.
//!
//! Fired once the bot has authenticated and completed the gateway handshake.
//! Global slash commands are (re-)registered here so a restart always pushes the
//! current command set to Discord.

use serenity::all::{Command, Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, commands::registrations()).await {
        Ok(registered) => {
            tracing::info!("Registered {} application commands", registered.len());
        }
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }
}
