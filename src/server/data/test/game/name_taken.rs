use super::*;

/// Tests duplicate detection within one owner's scope.
///
/// Expected: true for an existing name, false for a new one
#[tokio::test]
async fn detects_duplicate_within_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::game::GameFactory::new(db, user.id)
        .name("Valorant")
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert!(repo.name_taken(user.id, "Valorant", None).await?);
    assert!(!repo.name_taken(user.id, "Overwatch", None).await?);

    Ok(())
}

/// Tests that the same name is free for a different user.
///
/// Uniqueness is per owner, not global.
///
/// Expected: false for the other user
#[tokio::test]
async fn allows_same_name_for_different_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::game::GameFactory::new(db, user.id)
        .name("Valorant")
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert!(!repo.name_taken(other.id, "Valorant", None).await?);

    Ok(())
}

/// Tests that the excluded id doesn't count as a collision.
///
/// An update keeping a game's current name must not collide with itself.
///
/// Expected: false when the only match is the excluded game
#[tokio::test]
async fn excludes_given_game_id() -> Result<(), DbErr> {
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

    assert!(!repo.name_taken(user.id, "Valorant", Some(game.id)).await?);
    assert!(repo.name_taken(user.id, "Valorant", Some(game.id + 1)).await?);

    Ok(())
}
