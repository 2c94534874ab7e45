//! Voice-state event handler for activity tracking.
//!
//! Open sessions live in memory keyed by user id; a session is closed and
//! persisted when the member leaves or switches channels. Sessions that are still
//! open when the process stops are lost, matching the best-effort nature of the
//! tracking.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::VoiceState;
use uuid::Uuid;

use crate::data::voice_activity::VoiceActivityRepository;
use crate::model::voice::CreateVoiceActivityParam;

/// One member's open voice session.
struct OpenSession {
    session_id: Uuid,
    guild_id: String,
    channel_id: String,
    joined_at: DateTime<Utc>,
}

/// In-memory map of open voice sessions per user.
pub struct VoiceTracker {
    sessions: Mutex<HashMap<u64, OpenSession>>,
}

impl VoiceTracker {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Opens a session for a user, replacing any session left dangling.
    fn open(&self, user_id: u64, guild_id: String, channel_id: String) {
        let session = OpenSession {
            session_id: Uuid::new_v4(),
            guild_id,
            channel_id,
            joined_at: Utc::now(),
        };

        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.insert(user_id, session);
        }
    }

    /// Closes and returns a user's open session, if any.
    fn close(&self, user_id: u64) -> Option<OpenSession> {
        self.sessions.lock().ok()?.remove(&user_id)
    }
}

impl Default for VoiceTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles a voice state transition: join, leave, or channel switch.
///
/// # Arguments
/// - `db` - Database connection for persisting completed sessions
/// - `tracker` - In-memory session tracker
/// - `old` - Previous voice state, if the member had one
/// - `new` - Current voice state
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    tracker: &VoiceTracker,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let user_id = new.user_id.get();
    let old_channel = old.as_ref().and_then(|state| state.channel_id);

    match (old_channel, new.channel_id) {
        // Joined a voice channel
        (None, Some(channel_id)) => {
            open_session(tracker, user_id, &new, channel_id.get());
        }
        // Left voice entirely
        (Some(_), None) => {
            close_session(db, tracker, user_id).await;
        }
        // Switched channels
        (Some(old_id), Some(new_id)) if old_id != new_id => {
            close_session(db, tracker, user_id).await;
            open_session(tracker, user_id, &new, new_id.get());
        }
        _ => {}
    }
}

fn open_session(tracker: &VoiceTracker, user_id: u64, state: &VoiceState, channel_id: u64) {
    let guild_id = state
        .guild_id
        .map(|id| id.get().to_string())
        .unwrap_or_default();

    tracker.open(user_id, guild_id, channel_id.to_string());
    tracing::debug!("User {} joined voice channel {}", user_id, channel_id);
}

async fn close_session(db: &DatabaseConnection, tracker: &VoiceTracker, user_id: u64) {
    let Some(session) = tracker.close(user_id) else {
        return;
    };

    let duration_seconds = (Utc::now() - session.joined_at).num_seconds().max(0);

    tracing::info!(
        "User {} was in channel {} for {}s",
        user_id,
        session.channel_id,
        duration_seconds
    );

    let repo = VoiceActivityRepository::new(db);
    let result = repo
        .create(CreateVoiceActivityParam {
            session_id: session.session_id.to_string(),
            guild_id: session.guild_id,
            channel_id: session.channel_id,
            user_id: user_id.to_string(),
            duration_seconds,
        })
        .await;

    if let Err(e) = result {
        tracing::error!("Failed to store voice session for user {}: {}", user_id, e);
    }
}
