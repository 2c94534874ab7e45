use super::*;

/// Tests creating a match row on first sight.
///
/// Expected: Ok(true) and the row stored with map and duration
#[tokio::test]
async fn creates_new_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MatchRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchRecordRepository::new(db);
    let created = repo.find_or_create("match-1", "Erangel_Main", 1800).await?;
    assert!(created);

    let stored = entity::prelude::MatchRecord::find_by_id("match-1")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.map_name, "Erangel_Main");
    assert_eq!(stored.duration, 1800);

    Ok(())
}

/// Tests that reporting the same match twice keeps a single row.
///
/// Expected: Ok(false) on the second call and exactly one stored row
#[tokio::test]
async fn second_report_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MatchRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MatchRecordRepository::new(db);
    assert!(repo.find_or_create("match-1", "Erangel_Main", 1800).await?);
    assert!(!repo.find_or_create("match-1", "Erangel_Main", 1800).await?);

    let all = entity::prelude::MatchRecord::find().all(db).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
