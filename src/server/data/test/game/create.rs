use super::*;

/// Tests creating a new game with a genre.
///
/// Expected: Ok with game created and persisted
#[tokio::test]
async fn creates_game_with_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = GameRepository::new(db);
    let game = repo
        .create(user.id, "Valorant".to_string(), Some("Shooter".to_string()))
        .await?;

    assert_eq!(game.name, "Valorant");
    assert_eq!(game.genre, Some("Shooter".to_string()));
    assert_eq!(game.user_id, user.id);

    // Verify game exists in database
    let db_game = entity::prelude::Game::find_by_id(game.id).one(db).await?;
    assert!(db_game.is_some());
    assert_eq!(db_game.unwrap().name, "Valorant");

    Ok(())
}

/// Tests creating a new game without a genre.
///
/// Expected: Ok with genre stored as NULL
#[tokio::test]
async fn creates_game_without_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = GameRepository::new(db);
    let game = repo.create(user.id, "Elden Ring".to_string(), None).await?;

    assert_eq!(game.name, "Elden Ring");
    assert_eq!(game.genre, None);

    Ok(())
}
