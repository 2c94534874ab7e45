use super::*;

/// Tests creating a new player with zeroed totals.
///
/// Expected: Ok with the player stored under the given account id
#[tokio::test]
async fn creates_new_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo.find_or_create("account.abc", "Sniper").await?;

    assert_eq!(player.pubg_id, "account.abc");
    assert_eq!(player.username, "Sniper");
    assert_eq!(player.total_matches_played, 0);
    assert_eq!(player.total_score, 0.0);

    Ok(())
}

/// Tests that an existing player is returned untouched.
///
/// The second call with a different username returns the stored row; the
/// first-seen name sticks.
///
/// Expected: Ok with the original username and totals preserved
#[tokio::test]
async fn returns_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .pubg_id("account.abc")
        .username("Sniper")
        .total_kills(7)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo.find_or_create("account.abc", "RenamedSniper").await?;

    assert_eq!(player.username, "Sniper");
    assert_eq!(player.total_kills, 7);

    Ok(())
}

/// Tests looking a player up by their display name.
///
/// Expected: Ok(Some) for a stored name, Ok(None) otherwise
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db).username("Sniper").build().await?;

    let repo = PlayerRepository::new(db);
    assert!(repo.find_by_username("Sniper").await?.is_some());
    assert!(repo.find_by_username("Nobody").await?.is_none());

    Ok(())
}
