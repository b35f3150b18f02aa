use super::*;

/// Tests inserting several battles at once.
///
/// Verifies every record is stored with its values and that attacker/defender
/// slots land in the matching columns.
///
/// Expected: Ok(2) and two stored battles
#[tokio::test]
async fn inserts_all_battles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BattleRepository::new(db);
    let inserted = repo
        .create_many(vec![
            CreateBattleParams {
                name: Some("Battle of the Golden Tooth".to_string()),
                attacker_king: Some("Joffrey/Tommen Baratheon".to_string()),
                attackers: [Some("Lannister".to_string()), None, None, None],
                defenders: [Some("Tully".to_string()), None, None, None],
                attacker_outcome: Some("win".to_string()),
                defender_size: Some(4000),
                ..Default::default()
            },
            CreateBattleParams {
                name: Some("Battle at the Mummer's Ford".to_string()),
                ..Default::default()
            },
        ])
        .await?;

    assert_eq!(inserted, 2);

    let battles = repo.get_all().await?;
    assert_eq!(battles.len(), 2);

    let golden_tooth = battles
        .iter()
        .find(|b| b.name.as_deref() == Some("Battle of the Golden Tooth"))
        .unwrap();
    assert_eq!(golden_tooth.attacker_1.as_deref(), Some("Lannister"));
    assert_eq!(golden_tooth.defender_1.as_deref(), Some("Tully"));
    assert_eq!(golden_tooth.attacker_outcome, Some(AttackerOutcome::Win));
    assert_eq!(golden_tooth.defender_size, Some(4000));

    Ok(())
}

/// Tests inserting nothing.
///
/// Expected: Ok(0) without touching the store
#[tokio::test]
async fn empty_input_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BattleRepository::new(db);

    assert_eq!(repo.create_many(Vec::new()).await?, 0);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests inserting more battles than fit in a single statement.
///
/// Verifies that large imports are split into batches rather than exceeding
/// SQLite's bound parameter limit.
///
/// Expected: Ok(1500) and every battle stored
#[tokio::test]
async fn inserts_more_battles_than_one_statement_holds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let battles = (0..1500)
        .map(|n| CreateBattleParams {
            name: Some(format!("Skirmish {}", n)),
            attacker_king: Some("Robb Stark".to_string()),
            attackers: [Some("Stark".to_string()), None, None, None],
            defender_size: Some(n),
            ..Default::default()
        })
        .collect();

    let repo = BattleRepository::new(db);
    let inserted = repo.create_many(battles).await?;

    assert_eq!(inserted, 1500);
    assert_eq!(repo.count().await?, 1500);

    let stats = repo.get_stats().await?;
    assert_eq!(stats.defender_size_min, Some(0));
    assert_eq!(stats.defender_size_max, Some(1499));

    Ok(())
}
