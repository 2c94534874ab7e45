//! Match-polling subscription state machine.
//!
//! One subscription watches one player's match history on behalf of one Discord
//! channel. Subscribing schedules a repeating poll job; each tick fetches the
//! player's most recent match, decides whether it is a fresh custom match worth
//! reporting, and hands reportable matches to the report sink. A subscription ends
//! on explicit unsubscribe or after two hours without a reported match.
//!
//! State lives in an explicit [`SubscriptionState`] value owned per channel by the
//! manager, never in globals, so resubscribing one channel cannot disturb another
//! and the tick logic is testable with fake collaborators.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::error::{pubg::PubgError, AppError};
use crate::model::subscription::SubscriptionState;
use crate::pubg::model::{MatchResource, MatchResponse};
use crate::pubg::MatchLookup;

/// How often each subscription polls for a new match.
pub const POLL_INTERVAL: StdDuration = StdDuration::from_secs(30);

/// How long a subscription survives without a reported match.
const INACTIVITY_TIMEOUT_HOURS: i64 = 2;

const INACTIVITY_NOTICE: &str = "Auto unsubscribed due to inactivity";

/// Reporting collaborator consumed by the poller.
///
/// Implemented by the report service in production; tests substitute a recorder.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Publishes a reportable match: team report, persistence, leaderboard.
    async fn publish_match(&self, payload: &MatchResponse) -> Result<(), AppError>;

    /// Sends a plain text notice to the subscribing channel.
    async fn notify(&self, channel_id: u64, text: &str) -> Result<(), AppError>;
}

/// Decides whether a fetched match should be reported.
///
/// Rules, in order:
/// 1. Only custom matches are reportable; the type check runs first so public
///    matchmaking results skip the time arithmetic entirely.
/// 2. A match that concluded before the subscription began is stale.
/// 3. A match already reported this subscription is never repeated.
pub fn is_reportable(
    resource: &MatchResource,
    subscribed_at: DateTime<Utc>,
    last_seen_match_id: Option<&str>,
) -> bool {
    if !resource.attributes.is_custom() {
        return false;
    }

    if resource.attributes.ended_at() < subscribed_at {
        return false;
    }

    if last_seen_match_id == Some(resource.id.as_str()) {
        return false;
    }

    true
}

struct ActiveSubscription {
    job_id: Uuid,
    state: Arc<Mutex<SubscriptionState>>,
}

/// Owns all active subscriptions and their poll jobs.
///
/// Cloning is cheap; clones share the scheduler, collaborators, and subscription
/// map. At most one subscription is active per channel: subscribing again tears
/// down the previous poll job before scheduling a new one.
#[derive(Clone)]
pub struct SubscriptionManager {
    scheduler: JobScheduler,
    lookup: Arc<dyn MatchLookup>,
    sink: Arc<dyn ReportSink>,
    subs: Arc<Mutex<HashMap<u64, ActiveSubscription>>>,
    poll_interval: StdDuration,
    inactivity_timeout: Duration,
}

impl SubscriptionManager {
    /// Creates a new subscription manager.
    ///
    /// # Arguments
    /// - `scheduler` - Started job scheduler the poll jobs run on
    /// - `lookup` - Match-lookup collaborator (the PUBG client in production)
    /// - `sink` - Reporting collaborator for match reports and notices
    pub fn new(
        scheduler: JobScheduler,
        lookup: Arc<dyn MatchLookup>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            scheduler,
            lookup,
            sink,
            subs: Arc::new(Mutex::new(HashMap::new())),
            poll_interval: POLL_INTERVAL,
            inactivity_timeout: Duration::hours(INACTIVITY_TIMEOUT_HOURS),
        }
    }

    /// Overrides poll timing for tests.
    #[cfg(test)]
    pub(crate) fn with_timing(
        mut self,
        poll_interval: StdDuration,
        inactivity_timeout: Duration,
    ) -> Self {
        self.poll_interval = poll_interval;
        self.inactivity_timeout = inactivity_timeout;
        self
    }

    /// Starts watching a player on behalf of a channel.
    ///
    /// Any existing subscription for the channel is cancelled first so only one
    /// poll job per channel ever runs. The first tick fires one poll interval
    /// after subscribing.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel the subscription belongs to
    /// - `player_name` - PUBG name of the player to watch
    ///
    /// # Returns
    /// - `Ok(())` - Poll job scheduled
    /// - `Err(AppError::SchedulerErr)` - Scheduler rejected the job
    pub async fn subscribe(&self, channel_id: u64, player_name: &str) -> Result<(), AppError> {
        self.unsubscribe(channel_id).await?;

        let state = Arc::new(Mutex::new(SubscriptionState::new(player_name, Utc::now())));

        let manager = self.clone();
        let job = Job::new_repeated_async(self.poll_interval, move |job_id, _scheduler| {
            let manager = manager.clone();
            Box::pin(async move {
                manager.poll_tick(channel_id, job_id).await;
            })
        })?;

        let job_id = self.scheduler.add(job).await?;
        self.subs
            .lock()
            .await
            .insert(channel_id, ActiveSubscription { job_id, state });

        tracing::info!(
            "Subscribed channel {} to custom matches of '{}'",
            channel_id,
            player_name
        );

        Ok(())
    }

    /// Stops watching for a channel.
    ///
    /// Idempotent: unsubscribing a channel with no active subscription is a
    /// no-op, not an error.
    ///
    /// # Returns
    /// - `Ok(true)` - An active subscription was cancelled
    /// - `Ok(false)` - Nothing was active for the channel
    /// - `Err(AppError::SchedulerErr)` - Scheduler failed to remove the job
    pub async fn unsubscribe(&self, channel_id: u64) -> Result<bool, AppError> {
        let removed = self.subs.lock().await.remove(&channel_id);

        match removed {
            Some(sub) => {
                self.scheduler.remove(&sub.job_id).await?;
                tracing::info!("Unsubscribed channel {}", channel_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// One poll tick for one channel's subscription.
    ///
    /// Stale ticks (from a job that has since been replaced or cancelled) and
    /// overlapping ticks (previous tick's I/O still in flight) return without
    /// touching anything.
    async fn poll_tick(&self, channel_id: u64, job_id: Uuid) {
        let state = {
            let subs = self.subs.lock().await;
            match subs.get(&channel_id) {
                Some(sub) if sub.job_id == job_id => sub.state.clone(),
                _ => return,
            }
        };

        // Reentrancy guard: the state lock is held for the whole tick, so a tick
        // whose I/O outlives the poll interval makes the next one skip.
        let Ok(mut state) = state.try_lock() else {
            tracing::debug!(
                "Skipping poll tick for channel {}: previous tick still running",
                channel_id
            );
            return;
        };

        let now = Utc::now();
        if state.is_inactive(now, self.inactivity_timeout) {
            drop(state);
            if let Err(e) = self.remove_job(channel_id, job_id).await {
                tracing::error!(
                    "Failed to cancel inactive subscription for channel {}: {}",
                    channel_id,
                    e
                );
            }
            if let Err(e) = self.sink.notify(channel_id, INACTIVITY_NOTICE).await {
                tracing::warn!(
                    "Failed to send inactivity notice to channel {}: {}",
                    channel_id,
                    e
                );
            }
            return;
        }

        let payload = match self.latest_match(&state.player_name).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return,
            Err(e) => {
                // Transient API failures leave the subscription untouched; the
                // next tick tries again.
                tracing::warn!("Poll tick for '{}' produced no match: {}", state.player_name, e);
                return;
            }
        };

        if !is_reportable(
            &payload.data,
            state.subscribed_at,
            state.last_seen_match_id.as_deref(),
        ) {
            return;
        }

        // Mark the match seen before publishing: a failed publish is logged and
        // dropped rather than retried, keeping the at-most-once guarantee.
        state.record_report(&payload.data.id, now);

        tracing::info!(
            "Reporting custom match {} for channel {}",
            payload.data.id,
            channel_id
        );

        if let Err(e) = self.sink.publish_match(&payload).await {
            tracing::error!("Failed to publish match {}: {}", payload.data.id, e);
        }
    }

    /// Removes a poll job and its map entry, guarding against the entry having
    /// been replaced by a newer subscription in the meantime.
    async fn remove_job(&self, channel_id: u64, job_id: Uuid) -> Result<(), AppError> {
        let removed = {
            let mut subs = self.subs.lock().await;
            match subs.get(&channel_id) {
                Some(sub) if sub.job_id == job_id => subs.remove(&channel_id),
                _ => None,
            }
        };

        if removed.is_some() {
            self.scheduler.remove(&job_id).await?;
        }

        Ok(())
    }

    async fn latest_match(&self, player_name: &str) -> Result<Option<MatchResponse>, PubgError> {
        let ids = self.lookup.recent_match_ids(player_name, 1).await?;

        let Some(id) = ids.first() else {
            return Ok(None);
        };

        Ok(Some(self.lookup.fetch_match(id).await?))
    }

    /// Runs the current poll job for a channel once, synchronously.
    #[cfg(test)]
    pub(crate) async fn run_tick(&self, channel_id: u64) {
        let job_id = self.subs.lock().await.get(&channel_id).map(|s| s.job_id);

        if let Some(job_id) = job_id {
            self.poll_tick(channel_id, job_id).await;
        }
    }

    /// Whether a channel currently has an active subscription.
    #[cfg(test)]
    pub(crate) async fn is_active(&self, channel_id: u64) -> bool {
        self.subs.lock().await.contains_key(&channel_id)
    }

    /// The current job id for a channel, if subscribed.
    #[cfg(test)]
    pub(crate) async fn job_id(&self, channel_id: u64) -> Option<Uuid> {
        self.subs.lock().await.get(&channel_id).map(|s| s.job_id)
    }
}
