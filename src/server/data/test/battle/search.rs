use super::*;

/// Inserts five battles from the War of the Five Kings.
///
/// Robb Stark attacks three times (two ambushes), Joffrey once and Balon once.
/// Tully appears once as an attacker and once as a defender, Stark defends twice.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let rows: [(&str, &str, &str, &str, &str, &str, &[&str], &[&str]); 5] = [
        (
            "Battle of the Green Fork",
            "Robb Stark",
            "Joffrey/Tommen Baratheon",
            "pitched battle",
            "The Riverlands",
            "Green Fork",
            &["Stark", "Tully"],
            &["Lannister"],
        ),
        (
            "Battle in the Whispering Wood",
            "Robb Stark",
            "Joffrey/Tommen Baratheon",
            "ambush",
            "The Riverlands",
            "Whispering Wood",
            &["Stark"],
            &["Lannister"],
        ),
        (
            "Battle of Oxcross",
            "Robb Stark",
            "Joffrey/Tommen Baratheon",
            "ambush",
            "The Westerlands",
            "Oxcross",
            &["Stark"],
            &["Lannister"],
        ),
        (
            "Battle of the Red Fork",
            "Joffrey/Tommen Baratheon",
            "Robb Stark",
            "pitched battle",
            "The Riverlands",
            "Red Fork",
            &["Lannister"],
            &["Stark", "Tully"],
        ),
        (
            "Sack of Winterfell",
            "Balon/Euron Greyjoy",
            "Robb Stark",
            "ambush",
            "The North",
            "Winterfell",
            &["Greyjoy"],
            &["Stark"],
        ),
    ];

    for (name, attacker_king, defender_king, battle_type, region, location, attackers, defenders) in
        rows
    {
        BattleFactory::new(db)
            .with(|b| {
                b.name(Some(name))
                    .attacker_king(attacker_king)
                    .defender_king(defender_king)
                    .battle_type(battle_type)
                    .region(region)
                    .location(location)
                    .attackers(attackers)
                    .defenders(defenders)
            })
            .build()
            .await?;
    }

    Ok(())
}

fn names(battles: &[crate::server::model::battle::Battle]) -> Vec<&str> {
    let mut names: Vec<&str> = battles.iter().filter_map(|b| b.name.as_deref()).collect();
    names.sort_unstable();
    names
}

/// Tests that a search without filters returns every battle.
///
/// Expected: Ok with the same cardinality as `get_all`
#[tokio::test]
async fn no_filters_returns_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo.search(BattleSearchParams::default()).await?;

    assert_eq!(battles.len(), repo.get_all().await?.len());
    assert_eq!(battles.len(), 5);

    Ok(())
}

/// Tests the king filter matches either side.
///
/// Expected: Ok with battles where the king is attacker king or defender king
#[tokio::test]
async fn king_matches_attacker_or_defender_king() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo
        .search(BattleSearchParams {
            king: Some("Joffrey/Tommen Baratheon".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(
        names(&battles),
        vec![
            "Battle in the Whispering Wood",
            "Battle of Oxcross",
            "Battle of the Green Fork",
            "Battle of the Red Fork",
        ]
    );

    Ok(())
}

/// Tests the battle type filter is an exact match.
///
/// Expected: Ok with only ambushes
#[tokio::test]
async fn type_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo
        .search(BattleSearchParams {
            battle_type: Some("ambush".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(battles.len(), 3);
    assert!(battles
        .iter()
        .all(|b| b.battle_type.as_deref() == Some("ambush")));

    Ok(())
}

/// Tests the location filter matches region or location.
///
/// Expected: Ok with every Riverlands battle for the region, one battle for the location
#[tokio::test]
async fn location_matches_region_or_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);

    let by_region = repo
        .search(BattleSearchParams {
            location: Some("The Riverlands".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_region.len(), 3);

    let by_location = repo
        .search(BattleSearchParams {
            location: Some("Oxcross".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&by_location), vec!["Battle of Oxcross"]);

    Ok(())
}

/// Tests the attacker filter matches any of the four attacker slots.
///
/// Expected: Ok with battles where Tully appears among the attackers only
#[tokio::test]
async fn attacker_matches_any_attacker_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo
        .search(BattleSearchParams {
            attacker: Some("Tully".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&battles), vec!["Battle of the Green Fork"]);

    Ok(())
}

/// Tests the defender filter uses the defender value against the defender slots.
///
/// Expected: Ok with battles where Stark defended, regardless of attackers
#[tokio::test]
async fn defender_matches_any_defender_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo
        .search(BattleSearchParams {
            defender: Some("Stark".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(
        names(&battles),
        vec!["Battle of the Red Fork", "Sack of Winterfell"]
    );

    Ok(())
}

/// Tests filters combine conjunctively.
///
/// Expected: Ok with Robb's ambushes where Stark attacked in the Riverlands
#[tokio::test]
async fn filters_combine_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo
        .search(BattleSearchParams {
            king: Some("Robb Stark".to_string()),
            battle_type: Some("ambush".to_string()),
            location: Some("The Riverlands".to_string()),
            attacker: Some("Stark".to_string()),
            defender: Some("Lannister".to_string()),
        })
        .await?;

    assert_eq!(names(&battles), vec!["Battle in the Whispering Wood"]);

    Ok(())
}

/// Tests a filter matching nothing.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn unmatched_filter_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_battle_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = BattleRepository::new(db);
    let battles = repo
        .search(BattleSearchParams {
            king: Some("Stannis Baratheon".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(battles.is_empty());

    Ok(())
}
