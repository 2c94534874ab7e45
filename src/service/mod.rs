//! Service layer for business logic and orchestration.
//!
//! This module contains the business logic of the bot, sitting between the Discord
//! command surface and the data/API layers:
//!
//! - **Scoring** (`scoring`) - The MVP score formula and team aggregation, pure
//!   functions over match payloads
//! - **Subscription** (`subscription`) - The match-polling state machine: one
//!   repeating poll job per subscribed channel
//! - **Report** (`report`) - Webhook publishing of match summaries and leaderboards
//! - **Stats** (`stats`) - Persistence of match results and running player totals

pub mod report;
pub mod scoring;
pub mod stats;
pub mod subscription;

#[cfg(test)]
mod test;
