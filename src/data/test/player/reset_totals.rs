use super::*;

/// Tests zeroing every player's running totals.
///
/// Expected: Ok with all accumulator columns reset on all rows
#[tokio::test]
async fn zeroes_all_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = PlayerFactory::new(db)
        .total_score(42.0)
        .total_kills(10)
        .total_matches_played(3)
        .build()
        .await?;
    let second = PlayerFactory::new(db)
        .total_score(13.5)
        .total_kills(2)
        .total_matches_played(1)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    repo.reset_totals().await?;

    for username in [&first.username, &second.username] {
        let player = repo.find_by_username(username).await?.unwrap();
        assert_eq!(player.total_score, 0.0);
        assert_eq!(player.total_kills, 0);
        assert_eq!(player.total_assists, 0);
        assert_eq!(player.total_damage, 0.0);
        assert_eq!(player.total_matches_played, 0);
    }

    Ok(())
}
