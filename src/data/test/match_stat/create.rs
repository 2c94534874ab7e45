use super::*;

/// Tests inserting one player's stat line for one match.
///
/// Expected: Ok with the stat row linked to the player and match
#[tokio::test]
async fn creates_stat_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerFactory::new(db).build().await?;
    let record = MatchRecordFactory::new(db).build().await?;

    let repo = MatchStatRepository::new(db);
    repo.create(CreateMatchStatParam {
        match_id: record.match_id.clone(),
        player_id: player.pubg_id.clone(),
        kills: 4,
        assists: 2,
        damage: 312.5,
        time_survived: 900.0,
        rank: 3,
        score: 19.25,
    })
    .await?;

    let stored = entity::prelude::MatchStat::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].match_id, record.match_id);
    assert_eq!(stored[0].player_id, player.pubg_id);
    assert_eq!(stored[0].kills, 4);
    assert_eq!(stored[0].rank, 3);
    assert_eq!(stored[0].score, 19.25);

    Ok(())
}

/// Tests that multiple stat lines for the same match coexist.
#[tokio::test]
async fn allows_multiple_lines_per_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = PlayerFactory::new(db).build().await?;
    let second = PlayerFactory::new(db).build().await?;
    let record = MatchRecordFactory::new(db).build().await?;

    let repo = MatchStatRepository::new(db);
    for player in [&first, &second] {
        repo.create(CreateMatchStatParam {
            match_id: record.match_id.clone(),
            player_id: player.pubg_id.clone(),
            kills: 1,
            assists: 0,
            damage: 50.0,
            time_survived: 600.0,
            rank: 1,
            score: 5.0,
        })
        .await?;
    }

    let stored = entity::prelude::MatchStat::find().all(db).await?;
    assert_eq!(stored.len(), 2);

    Ok(())
}
