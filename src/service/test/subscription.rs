use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio_cron_scheduler::JobScheduler;

use crate::pubg::model::MatchResponse;
use crate::service::subscription::SubscriptionManager;
use crate::service::test::support::{FakeLookup, RecordingSink};
use test_utils::fixture::match_payload::{custom_match_payload, MatchPayloadParams};

const CHANNEL: u64 = 7;

/// Poll interval long enough that scheduled jobs never fire during a test;
/// ticks are driven manually.
const TEST_POLL_INTERVAL: StdDuration = StdDuration::from_secs(3600);

fn payload(params: &MatchPayloadParams) -> MatchResponse {
    serde_json::from_value(custom_match_payload(params)).unwrap()
}

async fn manager_with(
    lookup: Arc<FakeLookup>,
    sink: Arc<RecordingSink>,
    inactivity_timeout: Duration,
) -> SubscriptionManager {
    let scheduler = JobScheduler::new().await.unwrap();
    scheduler.start().await.unwrap();

    SubscriptionManager::new(scheduler, lookup, sink)
        .with_timing(TEST_POLL_INTERVAL, inactivity_timeout)
}

/// Tests that a fresh custom match is reported exactly once.
///
/// The second tick sees the same match id recorded as last seen and produces
/// no second report.
#[tokio::test]
async fn reports_new_match_once() {
    let lookup = Arc::new(FakeLookup::new(Some(payload(&MatchPayloadParams::default()))));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup, sink.clone(), Duration::hours(2)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();
    manager.run_tick(CHANNEL).await;
    manager.run_tick(CHANNEL).await;

    assert_eq!(sink.published(), vec!["match-1".to_string()]);
    assert!(manager.is_active(CHANNEL).await);
}

/// Tests that a different match id after a report is reported as well.
#[tokio::test]
async fn reports_each_new_match() {
    let lookup = Arc::new(FakeLookup::new(Some(payload(&MatchPayloadParams::default()))));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup.clone(), sink.clone(), Duration::hours(2)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();
    manager.run_tick(CHANNEL).await;

    let params = MatchPayloadParams {
        match_id: "match-2".to_string(),
        ..MatchPayloadParams::default()
    };
    lookup.set_payload(payload(&params));
    manager.run_tick(CHANNEL).await;

    assert_eq!(
        sink.published(),
        vec!["match-1".to_string(), "match-2".to_string()]
    );
}

/// Tests that a non-custom match is ignored by the poller.
#[tokio::test]
async fn ignores_non_custom_match() {
    let params = MatchPayloadParams {
        match_type: "official".to_string(),
        ..MatchPayloadParams::default()
    };
    let lookup = Arc::new(FakeLookup::new(Some(payload(&params))));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup, sink.clone(), Duration::hours(2)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();
    manager.run_tick(CHANNEL).await;

    assert!(sink.published().is_empty());
    assert!(manager.is_active(CHANNEL).await);
}

/// Tests that a lookup failure leaves the subscription untouched.
///
/// The failed tick publishes nothing and changes no state; once the API
/// recovers, the next tick reports as usual.
#[tokio::test]
async fn survives_transient_lookup_failure() {
    let lookup = Arc::new(FakeLookup::new(Some(payload(&MatchPayloadParams::default()))));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup.clone(), sink.clone(), Duration::hours(2)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();

    lookup.set_fail(true);
    manager.run_tick(CHANNEL).await;
    assert!(sink.published().is_empty());
    assert!(manager.is_active(CHANNEL).await);

    lookup.set_fail(false);
    manager.run_tick(CHANNEL).await;
    assert_eq!(sink.published(), vec!["match-1".to_string()]);
}

/// Tests that unsubscribing twice in a row is a no-op the second time.
#[tokio::test]
async fn unsubscribe_is_idempotent() {
    let lookup = Arc::new(FakeLookup::new(None));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup, sink, Duration::hours(2)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();

    assert!(manager.unsubscribe(CHANNEL).await.unwrap());
    assert!(!manager.unsubscribe(CHANNEL).await.unwrap());
    assert!(!manager.is_active(CHANNEL).await);
}

/// Tests that resubscribing replaces the existing poll job.
///
/// Only one subscription remains active for the channel and the poll job was
/// rescheduled under a new id.
#[tokio::test]
async fn resubscribe_replaces_poll_job() {
    let lookup = Arc::new(FakeLookup::new(None));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup, sink, Duration::hours(2)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();
    let first_job = manager.job_id(CHANNEL).await.unwrap();

    manager.subscribe(CHANNEL, "Player2").await.unwrap();
    let second_job = manager.job_id(CHANNEL).await.unwrap();

    assert_ne!(first_job, second_job);
    assert!(manager.is_active(CHANNEL).await);
}

/// Tests the inactivity timeout.
///
/// After the timeout elapses with no reported match, the next tick cancels the
/// subscription and emits exactly one notice; further ticks do nothing.
#[tokio::test]
async fn inactivity_auto_unsubscribes_once() {
    let lookup = Arc::new(FakeLookup::new(Some(payload(&MatchPayloadParams::default()))));
    let sink = Arc::new(RecordingSink::default());
    let manager = manager_with(lookup, sink.clone(), Duration::milliseconds(5)).await;

    manager.subscribe(CHANNEL, "Player1").await.unwrap();
    tokio::time::sleep(StdDuration::from_millis(25)).await;

    manager.run_tick(CHANNEL).await;
    assert!(!manager.is_active(CHANNEL).await);
    assert_eq!(
        sink.notices(),
        vec![(CHANNEL, "Auto unsubscribed due to inactivity".to_string())]
    );
    assert!(sink.published().is_empty());

    manager.run_tick(CHANNEL).await;
    assert_eq!(sink.notices().len(), 1);
}
