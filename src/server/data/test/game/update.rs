use super::*;

/// Tests updating only the name of a game.
///
/// Expected: Ok with name changed and genre untouched
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::GameFactory::new(db, user.id)
        .name("Valorant")
        .genre("Shooter")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(UpdateGameParams {
            id: game.id,
            user_id: user.id,
            name: Some("Valorant 2".to_string()),
            genre: None,
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Valorant 2");
    assert_eq!(updated.genre, Some("Shooter".to_string()));

    Ok(())
}

/// Tests updating only the genre of a game.
///
/// Expected: Ok with genre changed and name untouched
#[tokio::test]
async fn updates_genre_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::GameFactory::new(db, user.id)
        .name("Valorant")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(UpdateGameParams {
            id: game.id,
            user_id: user.id,
            name: None,
            genre: Some("Tactical Shooter".to_string()),
        })
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.name, "Valorant");
    assert_eq!(updated.genre, Some("Tactical Shooter".to_string()));

    Ok(())
}

/// Tests that updating another user's game does nothing.
///
/// Expected: Ok(None) and the game left unchanged
#[tokio::test]
async fn returns_none_for_other_users_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let game = factory::game::GameFactory::new(db, owner.id)
        .name("Valorant")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let updated = repo
        .update(UpdateGameParams {
            id: game.id,
            user_id: intruder.id,
            name: Some("Hijacked".to_string()),
            genre: None,
        })
        .await?;

    assert!(updated.is_none());

    let db_game = entity::prelude::Game::find_by_id(game.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_game.name, "Valorant");

    Ok(())
}
