//! Mutable state of an active match subscription.

use chrono::{DateTime, Duration, Utc};

/// Poll-loop state for one subscribed channel.
///
/// Created when a subscribe command is accepted, mutated on every reported match,
/// and dropped on unsubscribe or inactivity timeout. Owned by the subscription
/// manager; exactly one instance exists per subscribing channel.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionState {
    /// PUBG name of the watched player.
    pub player_name: String,
    /// Instant the subscription was accepted. Matches that concluded before this
    /// are never reported.
    pub subscribed_at: DateTime<Utc>,
    /// Id of the last reported match. A match is reported at most once per
    /// subscription lifetime.
    pub last_seen_match_id: Option<String>,
    /// Activity clock for the inactivity timeout. Advances only when a new match
    /// is reported, not on every poll.
    pub last_activity_at: DateTime<Utc>,
}

impl SubscriptionState {
    /// Creates fresh state for a newly accepted subscription.
    pub fn new(player_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            player_name: player_name.to_string(),
            subscribed_at: now,
            last_seen_match_id: None,
            last_activity_at: now,
        }
    }

    /// Whether the subscription has gone without a reported match for longer
    /// than `timeout`.
    pub fn is_inactive(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_activity_at > timeout
    }

    /// Records a reported match: remembers its id and refreshes the activity clock.
    pub fn record_report(&mut self, match_id: &str, now: DateTime<Utc>) {
        self.last_seen_match_id = Some(match_id.to_string());
        self.last_activity_at = now;
    }
}
