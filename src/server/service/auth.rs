//! Account registration and credential verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, NewUser, RegisterParams, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Requires username, email, and password to be present and non-empty, and
    /// the username and email to be unused. The password is hashed with
    /// argon2id before anything is persisted.
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let Some(username) = params.username.filter(|v| !v.is_empty()) else {
            return Err(AppError::BadRequest("Username is required".to_string()));
        };
        let Some(email) = params.email.filter(|v| !v.is_empty()) else {
            return Err(AppError::BadRequest("Email is required".to_string()));
        };
        let Some(password) = params.password.filter(|v| !v.is_empty()) else {
            return Err(AppError::BadRequest("Password is required".to_string()));
        };

        let repo = UserRepository::new(self.db);

        if repo.username_taken(&username).await? {
            return Err(AppError::BadRequest(
                "Username already taken".to_string(),
            ));
        }
        if repo.email_taken(&email).await? {
            return Err(AppError::BadRequest(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&password)?;

        let user = repo
            .create(NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Verifies login credentials and returns the matching user.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let Some(username) = params.username.filter(|v| !v.is_empty()) else {
            return Err(AppError::BadRequest("Username is required".to_string()));
        };
        let Some(password) = params.password.filter(|v| !v.is_empty()) else {
            return Err(AppError::BadRequest("Password is required".to_string()));
        };

        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(&username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Hashes a plain password with argon2id using a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verifies a password against a stored argon2id PHC string.
///
/// An unparseable stored hash counts as a failed verification.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
