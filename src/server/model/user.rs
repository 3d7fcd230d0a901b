//! User domain models and parameters.
//!
//! Provides the domain model for application users along with parameter types
//! for the register and login operations.

use chrono::{DateTime, Utc};

use crate::model::user::{LoginDto, RegisterDto, UserDto};

/// Application user with credentials and creation metadata.
///
/// Carries the stored password hash for credential verification; the hash is
/// dropped when converting to a DTO so it never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// Unique login handle.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Argon2id PHC string of the user's password.
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is intentionally not part of the DTO.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }
}

/// Unvalidated registration input as received from the client.
///
/// All fields are required for registration; validation happens in the auth
/// service so that missing and empty values produce the same error.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Unvalidated login input as received from the client.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}

/// Validated record for inserting a new user row.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
