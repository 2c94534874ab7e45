use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-wide unique id for factory defaults.
///
/// Keeps unique columns (usernames, match ids) from colliding when a test builds
/// several rows without overriding the defaults.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
