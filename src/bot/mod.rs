//! Discord bot integration: gateway events and the slash-command surface.
//!
//! The bot owns the interactive side of the application. Slash commands are
//! registered globally when the gateway reports ready and dispatched through a
//! tagged command enum; voice-state events feed the voice activity tracker.
//!
//! The gateway client runs on the main task; the subscription poll jobs it
//! triggers run on the shared scheduler, so a slow poll never blocks event
//! handling.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild lifecycle events and interaction routing
//! - `GUILD_MESSAGES` - Message events in guilds
//! - `GUILD_VOICE_STATES` - Voice join/leave/switch events for activity tracking

pub mod commands;
pub mod handler;
pub mod start;
