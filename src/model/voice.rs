//! Parameter types for voice-channel activity records.

/// Parameters for persisting one completed voice-channel session.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVoiceActivityParam {
    /// Random session id assigned at join time.
    pub session_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub duration_seconds: i64,
}
