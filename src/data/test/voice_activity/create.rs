use super::*;

/// Tests persisting a completed voice session.
///
/// Expected: Ok with the session stored including its duration
#[tokio::test]
async fn creates_voice_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VoiceActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoiceActivityRepository::new(db);
    repo.create(CreateVoiceActivityParam {
        session_id: "session-1".to_string(),
        guild_id: "100".to_string(),
        channel_id: "200".to_string(),
        user_id: "300".to_string(),
        duration_seconds: 754,
    })
    .await?;

    let stored = entity::prelude::VoiceActivity::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].session_id, "session-1");
    assert_eq!(stored[0].duration_seconds, 754);

    Ok(())
}
