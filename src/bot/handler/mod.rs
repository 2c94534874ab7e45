use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready, VoiceState};
use serenity::async_trait;

use crate::pubg::client::PubgClient;
use crate::service::report::ReportService;
use crate::service::subscription::SubscriptionManager;

pub mod command;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub manager: SubscriptionManager,
    pub pubg: Arc<PubgClient>,
    pub report: Arc<ReportService>,
    pub voice: voice::VoiceTracker,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        manager: SubscriptionManager,
        pubg: Arc<PubgClient>,
        report: Arc<ReportService>,
    ) -> Self {
        Self {
            db,
            manager,
            pubg,
            report,
            voice: voice::VoiceTracker::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a slash command or other interaction is created
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        command::handle_interaction(self, ctx, interaction).await;
    }

    /// Called when a member joins, leaves, or switches voice channels
    async fn voice_state_update(&self, _ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.db, &self.voice, old, new).await;
    }
}
