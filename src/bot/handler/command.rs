//! Slash-command dispatch.
//!
//! Every command acknowledges immediately with an ephemeral reply, then does its
//! work; slow results and failures arrive as follow-ups. Errors are caught at the
//! dispatch boundary and answered with a generic failure message so a bad command
//! never takes down the gateway task.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::bot::commands::SlashCommand;
use crate::bot::handler::Handler;
use crate::data::player::PlayerRepository;
use crate::error::{pubg::PubgError, AppError};
use crate::pubg::MatchLookup;

/// How far back `/get` scans a player's match history for a custom match.
const RECENT_MATCH_SCAN_DEPTH: usize = 15;

/// Handles an interaction event, dispatching recognized slash commands.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(slash) = SlashCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command '{}'", command.data.name);
        return;
    };

    tracing::info!("Received command interaction: {}", command.data.name);

    let result = match slash {
        SlashCommand::Subscribe => subscribe(handler, &ctx, &command).await,
        SlashCommand::Unsubscribe => unsubscribe(handler, &ctx, &command).await,
        SlashCommand::Get => get(handler, &ctx, &command).await,
        SlashCommand::GetId => get_id(handler, &ctx, &command).await,
        SlashCommand::Reset => reset(handler, &ctx, &command).await,
        SlashCommand::Leaderboard => leaderboard(handler, &ctx, &command).await,
    };

    if let Err(e) = result {
        tracing::error!("Command '{}' failed: {}", command.data.name, e);

        let failure = CreateInteractionResponseFollowup::new()
            .content("\u{274C} There was an error processing your request.")
            .ephemeral(true);
        if let Err(e) = command.create_followup(&ctx.http, failure).await {
            tracing::warn!("Failed to send error follow-up: {}", e);
        }
    }
}

async fn subscribe(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(name) = option_str(command, "name") else {
        return respond(ctx, command, "\u{274C} Missing player name.").await;
    };

    handler
        .manager
        .subscribe(command.channel_id.get(), &name)
        .await?;

    respond(
        ctx,
        command,
        format!("\u{2705} Successfully subscribed {} for custom games!", name),
    )
    .await
}

async fn unsubscribe(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let removed = handler
        .manager
        .unsubscribe(command.channel_id.get())
        .await?;

    let content = if removed {
        "\u{2705} Successfully unsubscribed from updates!"
    } else {
        "Nothing is subscribed in this channel."
    };

    respond(ctx, command, content).await
}

async fn get(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(name) = option_str(command, "name") else {
        return respond(ctx, command, "\u{274C} Missing player name.").await;
    };

    respond(
        ctx,
        command,
        format!(
            "Trying to get last custom game in last {} matches for {}",
            RECENT_MATCH_SCAN_DEPTH, name
        ),
    )
    .await?;

    match handler
        .pubg
        .find_last_custom_match(&name, RECENT_MATCH_SCAN_DEPTH)
        .await
    {
        Ok(Some(payload)) => handler.report.report_match(&payload).await,
        Ok(None) => {
            follow_up(
                ctx,
                command,
                format!(
                    "\u{274C} No custom game found in last {} matches for {}",
                    RECENT_MATCH_SCAN_DEPTH, name
                ),
            )
            .await
        }
        Err(PubgError::PlayerNotFound(name)) => {
            follow_up(
                ctx,
                command,
                format!("\u{274C} No PUBG player found with name '{}'", name),
            )
            .await
        }
        Err(e) => Err(e.into()),
    }
}

async fn get_id(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(match_id) = option_str(command, "id") else {
        return respond(ctx, command, "\u{274C} Missing match id.").await;
    };

    respond(ctx, command, "Trying to get custom game from id").await?;

    match handler.pubg.fetch_match(&match_id).await {
        Ok(payload) => handler.report.report_match(&payload).await,
        Err(PubgError::MatchNotFound(match_id)) => {
            follow_up(
                ctx,
                command,
                format!("\u{274C} No match found with id '{}'", match_id),
            )
            .await
        }
        Err(e) => Err(e.into()),
    }
}

async fn reset(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    respond(ctx, command, "Trying to reset leaderboard").await?;

    PlayerRepository::new(&handler.db).reset_totals().await?;

    follow_up(ctx, command, "\u{2705} Leaderboard totals reset.").await
}

async fn leaderboard(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    respond(ctx, command, "Trying to send leaderboard").await?;

    handler.report.publish_leaderboard().await
}

fn option_str(command: &CommandInteraction, name: &str) -> Option<String> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .map(ToString::to_string)
}

async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

async fn follow_up(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);

    command.create_followup(&ctx.http, message).await?;

    Ok(())
}
