mod bot;
mod config;
mod data;
mod error;
mod model;
mod pubg;
mod service;
mod startup;

use std::sync::Arc;

use serenity::http::Http;
use tokio_cron_scheduler::JobScheduler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::pubg::client::PubgClient;
use crate::pubg::MatchLookup;
use crate::service::report::ReportService;
use crate::service::subscription::{ReportSink, SubscriptionManager};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrimbot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client()?;

    let pubg = Arc::new(PubgClient::new(
        http_client,
        &config.pubg_api_key,
        &config.pubg_api_base_url,
    ));

    // Standalone Discord HTTP client for webhooks and notices; the gateway
    // client below owns its own.
    let discord_http = Arc::new(Http::new(&config.discord_bot_token));

    let report = Arc::new(ReportService::new(
        db.clone(),
        discord_http,
        config.webhook_url.clone(),
        pubg.clone() as Arc<dyn MatchLookup>,
    ));

    let scheduler = JobScheduler::new().await?;
    scheduler.start().await?;

    let manager = SubscriptionManager::new(
        scheduler,
        pubg.clone() as Arc<dyn MatchLookup>,
        report.clone() as Arc<dyn ReportSink>,
    );

    tracing::info!("Starting scrimbot");

    let handler = Handler::new(db, manager, pubg, report);
    let client = bot::start::init_bot(&config, handler).await?;

    bot::start::start_bot(client).await
}
