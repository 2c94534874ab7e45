use thiserror::Error;

/// Errors from the PUBG REST API boundary.
///
/// Transient request failures and not-found conditions are distinguished so callers
/// can surface the latter as user-visible messages while merely logging the former.
#[derive(Error, Debug)]
pub enum PubgError {
    /// Request-level failure: connection error, throttling, or a non-success
    /// HTTP status from the API.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The players endpoint returned no account for the given name.
    #[error("No PUBG player found with name '{0}'")]
    PlayerNotFound(String),

    /// The matches endpoint returned no match for the given id.
    #[error("No match found with id '{0}'")]
    MatchNotFound(String),

    /// The payload deserialized but failed validation.
    ///
    /// Malformed data is rejected at the boundary rather than passed through, so
    /// downstream scoring never sees a zero duration or similar garbage.
    #[error("Invalid match payload for '{match_id}': {reason}")]
    InvalidPayload {
        /// Id of the match whose payload was rejected
        match_id: String,
        /// What was wrong with the payload
        reason: String,
    },
}
