use super::*;

/// Tests fetching a loadout by id scoped to its owner.
///
/// Expected: Ok(Some) for the owner
#[tokio::test]
async fn returns_owned_loadout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _game, loadout) = factory::helpers::create_loadout_with_dependencies(db).await?;

    let repo = LoadoutRepository::new(db);
    let found = repo.get_by_id(loadout.id, user.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, loadout.id);

    Ok(())
}

/// Tests that another user's loadout is invisible.
///
/// Expected: Ok(None) for the non-owner
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
    let found = repo.get_by_id(loadout.id, intruder.id).await?;

    assert!(found.is_none());

    Ok(())
}
