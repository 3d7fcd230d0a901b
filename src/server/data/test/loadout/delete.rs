use super::*;

/// Tests deleting an owned loadout.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn deletes_owned_loadout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _game, loadout) = factory::helpers::create_loadout_with_dependencies(db).await?;

    let repo = LoadoutRepository::new(db);
    let deleted = repo.delete(loadout.id, user.id).await?;

    assert!(deleted);

    let db_loadout = entity::prelude::Loadout::find_by_id(loadout.id)
        .one(db)
        .await?;
    assert!(db_loadout.is_none());

    Ok(())
}

/// Tests that deleting another user's loadout does nothing.
///
/// Expected: Ok(false) with the row untouched
#[tokio::test]
async fn returns_false_for_other_users_loadout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _game, loadout) = factory::helpers::create_loadout_with_dependencies(db).await?;
    let intruder = factory::user::create_user(db).await?;

    let repo = LoadoutRepository::new(db);
    let deleted = repo.delete(loadout.id, intruder.id).await?;

    assert!(!deleted);

    let db_loadout = entity::prelude::Loadout::find_by_id(loadout.id)
        .one(db)
        .await?;
    assert!(db_loadout.is_some());

    Ok(())
}
