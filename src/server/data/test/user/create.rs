use super::*;

/// Tests creating a new user from a validated record.
///
/// Verifies that the repository persists the username, email, and password
/// hash and returns a domain model with a generated id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "phc-string".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password_hash, "phc-string");

    // Verify user exists in database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().username, "alice");

    Ok(())
}

/// Tests that the unique username column rejects a second identical username.
///
/// The service layer checks availability first; the constraint is the
/// storage-level backstop.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username_at_store_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_loadout_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(NewUser {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "phc-string".to_string(),
    })
    .await?;

    let result = repo
        .create(NewUser {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "phc-string".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
