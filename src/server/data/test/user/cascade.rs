use super::*;

/// Tests that deleting a user removes every game and loadout they own.
///
/// The foreign keys on game.user_id and loadout.user_id cascade, so removing
/// the owning row must leave no records referencing it.
///
/// Expected: zero games and loadouts for the deleted user, other users untouched
#[tokio::test]
async fn deleting_user_removes_owned_games_and_loadouts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _game, _loadout) = factory::helpers::create_loadout_with_dependencies(db).await?;
    let (other_user, _other_game, _other_loadout) =
        factory::helpers::create_loadout_with_dependencies(db).await?;

    let user_entity = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    user_entity.delete(db).await?;

    let games = entity::prelude::Game::find().all(db).await?;
    let loadouts = entity::prelude::Loadout::find().all(db).await?;

    assert!(games.iter().all(|g| g.user_id != user.id));
    assert!(loadouts.iter().all(|l| l.user_id != user.id));

    // The other user's records survive
    assert!(games.iter().any(|g| g.user_id == other_user.id));
    assert!(loadouts.iter().any(|l| l.user_id == other_user.id));

    Ok(())
}
