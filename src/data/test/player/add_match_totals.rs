use super::*;

/// Tests that one match's contribution increments every total atomically.
///
/// Expected: Ok with score, kills, assists, damage added and matches played
/// advanced by one
#[tokio::test]
async fn increments_running_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerFactory::new(db).build().await?;

    let repo = PlayerRepository::new(db);
    repo.add_match_totals(
        &player.pubg_id,
        &MatchTotalsParam {
            score: 12.5,
            kills: 3,
            assists: 1,
            damage: 250.0,
        },
    )
    .await?;
    repo.add_match_totals(
        &player.pubg_id,
        &MatchTotalsParam {
            score: 7.5,
            kills: 1,
            assists: 2,
            damage: 100.0,
        },
    )
    .await?;

    let updated = repo.find_by_username(&player.username).await?.unwrap();
    assert_eq!(updated.total_score, 20.0);
    assert_eq!(updated.total_kills, 4);
    assert_eq!(updated.total_assists, 3);
    assert_eq!(updated.total_damage, 350.0);
    assert_eq!(updated.total_matches_played, 2);

    Ok(())
}

/// Tests that totals for other players are untouched by an increment.
#[tokio::test]
async fn leaves_other_players_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = PlayerFactory::new(db).build().await?;
    let other = PlayerFactory::new(db).total_kills(5).build().await?;

    let repo = PlayerRepository::new(db);
    repo.add_match_totals(
        &target.pubg_id,
        &MatchTotalsParam {
            score: 1.0,
            kills: 1,
            assists: 0,
            damage: 10.0,
        },
    )
    .await?;

    let untouched = repo.find_by_username(&other.username).await?.unwrap();
    assert_eq!(untouched.total_kills, 5);
    assert_eq!(untouched.total_matches_played, 0);

    Ok(())
}
