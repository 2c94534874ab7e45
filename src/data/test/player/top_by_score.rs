use super::*;

/// Tests leaderboard ordering by total score descending.
///
/// Expected: Ok with players best first
#[tokio::test]
async fn orders_by_score_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .username("mid")
        .total_score(50.0)
        .build()
        .await?;
    PlayerFactory::new(db)
        .username("best")
        .total_score(99.0)
        .build()
        .await?;
    PlayerFactory::new(db)
        .username("worst")
        .total_score(1.0)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let top = repo.top_by_score(10).await?;

    let names: Vec<&str> = top.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["best", "mid", "worst"]);

    Ok(())
}

/// Tests that the limit caps the number of returned players.
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for score in [10.0, 20.0, 30.0] {
        PlayerFactory::new(db).total_score(score).build().await?;
    }

    let repo = PlayerRepository::new(db);
    let top = repo.top_by_score(2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].total_score, 30.0);

    Ok(())
}
