use super::*;

/// Tests finding a user by primary key.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(user.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().username, user.username);

    let missing = repo.find_by_id(user.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests finding a user by their unique username.
///
/// Expected: Ok(Some) for a known username, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_username("bob").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, user.id);

    let missing = repo.find_by_username("nobody").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the username and email availability checks.
///
/// Expected: true for taken values, false for free ones
#[tokio::test]
async fn reports_taken_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("carol")
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("carol").await?);
    assert!(!repo.username_taken("dave").await?);
    assert!(repo.email_taken("carol@example.com").await?);
    assert!(!repo.email_taken("dave@example.com").await?);

    Ok(())
}
