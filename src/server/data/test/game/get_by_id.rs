use super::*;

/// Tests fetching a game by id scoped to its owner.
///
/// Expected: Ok(Some) for the owner
#[tokio::test]
async fn returns_owned_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let game = factory::game::create_game(db, user.id).await?;

    let repo = GameRepository::new(db);
    let found = repo.get_by_id(game.id, user.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, game.id);

    Ok(())
}

/// Tests that another user's game is invisible.
///
/// Owner scoping means a valid id queried by the wrong user behaves exactly
/// like a missing record.
///
/// Expected: Ok(None) for the non-owner
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
    let game = factory::game::create_game(db, owner.id).await?;

    let repo = GameRepository::new(db);
    let found = repo.get_by_id(game.id, intruder.id).await?;

    assert!(found.is_none());

    Ok(())
}
