use super::*;

/// Tests a partial update leaving omitted fields untouched.
///
/// Expected: Ok with only the provided fields changed
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::create_game(db, user.id).await?;
    let loadout = factory::loadout::LoadoutFactory::new(db, user.id, game.id)
        .name("Sniper")
        .weapons("Operator")
        .notes("Old notes")
        .build()
        .await?;

    let repo = LoadoutRepository::new(db);
    let updated = repo
        .update(UpdateLoadoutParams {
            id: loadout.id,
            user_id: user.id,
            name: None,
            game_id: None,
            weapons: Some("Operator, Ghost".to_string()),
            abilities: None,
            stats: None,
            notes: None,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Sniper");
    assert_eq!(updated.weapons, Some("Operator, Ghost".to_string()));
    assert_eq!(updated.notes, Some("Old notes".to_string()));

    Ok(())
}

/// Tests that every update refreshes the update timestamp.
///
/// Expected: Ok with updated_at strictly newer than before
#[tokio::test]
async fn refreshes_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::create_game(db, user.id).await?;
    let loadout = factory::loadout::LoadoutFactory::new(db, user.id, game.id)
        .updated_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = LoadoutRepository::new(db);
    let updated = repo
        .update(UpdateLoadoutParams {
            id: loadout.id,
            user_id: user.id,
            name: Some("Renamed".to_string()),
            game_id: None,
            weapons: None,
            abilities: None,
            stats: None,
            notes: None,
        })
        .await?
        .unwrap();

    assert!(updated.updated_at > loadout.updated_at);
    assert_eq!(updated.created_at, loadout.created_at);

    Ok(())
}

/// Tests moving a loadout to a different game.
///
/// Ownership of the target game is the service layer's responsibility; the
/// repository just applies the change.
///
/// Expected: Ok with game_id changed
#[tokio::test]
async fn changes_game_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::create_game(db, user.id).await?;
    let new_game = factory::game::create_game(db, user.id).await?;
    let loadout = factory::loadout::create_loadout(db, user.id, game.id).await?;

    let repo = LoadoutRepository::new(db);
    let updated = repo
        .update(UpdateLoadoutParams {
            id: loadout.id,
            user_id: user.id,
            name: None,
            game_id: Some(new_game.id),
            weapons: None,
            abilities: None,
            stats: None,
            notes: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.game_id, new_game.id);

    Ok(())
}

/// Tests that updating another user's loadout does nothing.
///
/// Expected: Ok(None) and the loadout left unchanged
#[tokio::test]
async fn returns_none_for_other_users_loadout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _game, loadout) = factory::helpers::create_loadout_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let repo = LoadoutRepository::new(db);
    let updated = repo
        .update(UpdateLoadoutParams {
            id: loadout.id,
            user_id: intruder.id,
            name: Some("Hijacked".to_string()),
            game_id: None,
            weapons: None,
            abilities: None,
            stats: None,
            notes: None,
        })
        .await?;

    assert!(updated.is_none());

    let db_loadout = entity::prelude::Loadout::find_by_id(loadout.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_loadout.name, loadout.name);

    Ok(())
}
