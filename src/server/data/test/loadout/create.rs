use super::*;

/// Tests creating a loadout with all opaque text fields.
///
/// Expected: Ok with every field stored as-is and both timestamps equal
#[tokio::test]
async fn creates_loadout_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::create_game(db, user.id).await?;

    let repo = LoadoutRepository::new(db);
    let loadout = repo
        .create(NewLoadout {
            user_id: user.id,
            game_id: game.id,
            name: "Sniper".to_string(),
            weapons: Some("Operator, Sheriff".to_string()),
            abilities: Some("Flash, Smoke".to_string()),
            stats: Some("{\"accuracy\": 72}".to_string()),
            notes: Some("Eco rounds only".to_string()),
        })
        .await?;

    assert_eq!(loadout.name, "Sniper");
    assert_eq!(loadout.weapons, Some("Operator, Sheriff".to_string()));
    assert_eq!(loadout.abilities, Some("Flash, Smoke".to_string()));
    assert_eq!(loadout.stats, Some("{\"accuracy\": 72}".to_string()));
    assert_eq!(loadout.notes, Some("Eco rounds only".to_string()));
    assert_eq!(loadout.user_id, user.id);
    assert_eq!(loadout.game_id, game.id);
    assert_eq!(loadout.created_at, loadout.updated_at);

    // Verify loadout exists in database
    let db_loadout = entity::prelude::Loadout::find_by_id(loadout.id)
        .one(db)
        .await?;
    assert!(db_loadout.is_some());
    assert_eq!(db_loadout.unwrap().name, "Sniper");

    Ok(())
}

/// Tests creating a loadout with only the required fields.
///
/// Expected: Ok with the optional text fields stored as NULL
#[tokio::test]
async fn creates_loadout_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::create_game(db, user.id).await?;

    let repo = LoadoutRepository::new(db);
    let loadout = repo
        .create(NewLoadout {
            user_id: user.id,
            game_id: game.id,
            name: "Bare".to_string(),
            weapons: None,
            abilities: None,
            stats: None,
            notes: None,
        })
        .await?;

    assert_eq!(loadout.name, "Bare");
    assert_eq!(loadout.weapons, None);
    assert_eq!(loadout.abilities, None);
    assert_eq!(loadout.stats, None);
    assert_eq!(loadout.notes, None);

    Ok(())
}
