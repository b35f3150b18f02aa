use super::*;

/// Tests listing every battle.
///
/// Verifies that the repository returns all stored battles converted to domain models.
///
/// Expected: Ok with one entry per stored battle
#[tokio::test]
async fn returns_all_battles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_battles(db, 3).await?;

    let repo = BattleRepository::new(db);
    let battles = repo.get_all().await?;

    assert_eq!(battles.len(), 3);
    for model in created {
        assert!(battles.iter().any(|b| b.id == model.id && b.name == model.name));
    }

    Ok(())
}

/// Tests listing an empty store.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_battles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BattleRepository::new(db);
    let battles = repo.get_all().await?;

    assert!(battles.is_empty());

    Ok(())
}

/// Tests stored values are validated into domain types.
///
/// Verifies that 0/1 flags become booleans and the attacker outcome becomes an enum.
///
/// Expected: Ok with converted fields
#[tokio::test]
async fn converts_stored_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    BattleFactory::new(db)
        .with(|b| b.attacker_outcome("loss").summer(true).major_capture(false))
        .build()
        .await?;

    let repo = BattleRepository::new(db);
    let battles = repo.get_all().await?;

    assert_eq!(battles[0].attacker_outcome, Some(AttackerOutcome::Loss));
    assert_eq!(battles[0].summer, Some(true));
    assert_eq!(battles[0].major_capture, Some(false));
    assert_eq!(battles[0].major_death, None);

    Ok(())
}
