use super::*;

/// Tests statistics over an empty store.
///
/// Expected: Ok with zero counters, no battle types and no defender size figures
#[tokio::test]
async fn empty_store_yields_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BattleRepository::new(db);
    let stats = repo.get_stats().await?;

    assert_eq!(stats.attacker_king_count, 0);
    assert_eq!(stats.defender_king_count, 0);
    assert_eq!(stats.region_count, 0);
    assert_eq!(stats.name_count, 0);
    assert_eq!(stats.win_count, 0);
    assert_eq!(stats.loss_count, 0);
    assert!(stats.battle_types.is_empty());
    assert_eq!(stats.defender_size_average, None);
    assert_eq!(stats.defender_size_min, None);
    assert_eq!(stats.defender_size_max, None);

    Ok(())
}

/// Tests statistics over a single battle.
///
/// Expected: Ok with one attacker king, one win, one battle type and all size figures equal
#[tokio::test]
async fn single_battle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BattleFactory::new(db)
        .with(|b| {
            b.attacker_king("Robb Stark")
                .defender_king("Joffrey Baratheon")
                .attacker_outcome("win")
                .battle_type("ambush")
                .defender_size(2000)
        })
        .build()
        .await?;

    let repo = BattleRepository::new(db);
    let stats = repo.get_stats().await?;

    assert_eq!(stats.attacker_king_count, 1);
    assert_eq!(stats.defender_king_count, 1);
    assert_eq!(stats.win_count, 1);
    assert_eq!(stats.loss_count, 0);
    assert_eq!(stats.battle_types, vec!["ambush".to_string()]);
    assert_eq!(stats.defender_size_average, Some(2000.0));
    assert_eq!(stats.defender_size_min, Some(2000));
    assert_eq!(stats.defender_size_max, Some(2000));

    Ok(())
}

/// Tests presence counts are computed per column.
///
/// Verifies that defender king, region and name counts do not follow the
/// attacker king count, and that empty strings are not counted.
///
/// Expected: Ok with independent counts
#[tokio::test]
async fn presence_counts_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BattleFactory::new(db)
        .with(|b| b.attacker_king("Robb Stark").region("The North"))
        .build()
        .await?;
    BattleFactory::new(db)
        .with(|b| b.attacker_king("Stannis Baratheon").defender_king("Joffrey Baratheon"))
        .build()
        .await?;
    BattleFactory::new(db)
        .with(|b| b.name(None).attacker_king("").defender_king("Robb Stark"))
        .build()
        .await?;
    BattleFactory::new(db)
        .with(|b| b.name(Some("")).region(""))
        .build()
        .await?;

    let repo = BattleRepository::new(db);
    let stats = repo.get_stats().await?;

    assert_eq!(stats.attacker_king_count, 2);
    assert_eq!(stats.defender_king_count, 2);
    assert_eq!(stats.region_count, 1);
    assert_eq!(stats.name_count, 2);

    Ok(())
}

/// Tests outcome counts and the defender size aggregates over several battles.
///
/// Expected: Ok with outcome counts ignoring unspecified outcomes and sizes ignoring NULLs
#[tokio::test]
async fn outcomes_and_defender_sizes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BattleFactory::new(db)
        .with(|b| b.attacker_outcome("win").defender_size(100))
        .build()
        .await?;
    BattleFactory::new(db)
        .with(|b| b.attacker_outcome("win").defender_size(400))
        .build()
        .await?;
    BattleFactory::new(db)
        .with(|b| b.attacker_outcome("loss"))
        .build()
        .await?;
    BattleFactory::new(db)
        .with(|b| b.attacker_outcome("draw").defender_size(250))
        .build()
        .await?;

    let repo = BattleRepository::new(db);
    let stats = repo.get_stats().await?;

    assert_eq!(stats.win_count, 2);
    assert_eq!(stats.loss_count, 1);
    assert_eq!(stats.defender_size_average, Some(250.0));
    assert_eq!(stats.defender_size_min, Some(100));
    assert_eq!(stats.defender_size_max, Some(400));

    Ok(())
}

/// Tests battle types are distinct and sorted.
///
/// Expected: Ok with each non-null battle type once, in ascending order
#[tokio::test]
async fn battle_types_are_distinct_and_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for battle_type in ["siege", "ambush", "pitched battle", "ambush"] {
        BattleFactory::new(db)
            .with(|b| b.battle_type(battle_type))
            .build()
            .await?;
    }
    factory::create_battle(db).await?;

    let repo = BattleRepository::new(db);
    let stats = repo.get_stats().await?;

    assert_eq!(
        stats.battle_types,
        vec![
            "ambush".to_string(),
            "pitched battle".to_string(),
            "siege".to_string(),
        ]
    );

    Ok(())
}
