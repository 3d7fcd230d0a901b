use super::*;

/// Tests that the list contains only the caller's games, ordered by name.
///
/// Expected: Ok with the caller's games in ascending name order
#[tokio::test]
async fn returns_callers_games_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::game::GameFactory::new(db, user.id)
        .name("Overwatch")
        .build()
        .await?;
    factory::game::GameFactory::new(db, user.id)
        .name("Apex Legends")
        .build()
        .await?;
    factory::game::GameFactory::new(db, user.id)
        .name("Valorant")
        .build()
        .await?;
    factory::game::GameFactory::new(db, other.id)
        .name("Dota 2")
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.get_by_user_id(user.id).await?;

    let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Apex Legends", "Overwatch", "Valorant"]);

    Ok(())
}

/// Tests that a user with no games gets an empty list.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_without_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = GameRepository::new(db);
    let games = repo.get_by_user_id(user.id).await?;

    assert!(games.is_empty());

    Ok(())
}
