//! Game domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::game::{CreateGameDto, GameDto, UpdateGameDto};

/// A named game category owned by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Primary key of the game.
    pub id: i32,
    /// Display name, unique within the owner's games.
    pub name: String,
    /// Optional genre tag (RPG, Shooter, ...).
    pub genre: Option<String>,
    /// Id of the owning user.
    pub user_id: i32,
    /// When the game was created.
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Converts the game domain model to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            genre: self.genre,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a game domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            genre: entity.genre,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}

/// Unvalidated game creation input scoped to the calling user.
#[derive(Debug, Clone)]
pub struct CreateGameParams {
    /// Id of the authenticated caller who will own the game.
    pub user_id: i32,
    /// Requested name; required, validated in the service layer.
    pub name: Option<String>,
    /// Optional genre tag.
    pub genre: Option<String>,
}

impl CreateGameParams {
    pub fn from_dto(user_id: i32, dto: CreateGameDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            genre: dto.genre,
        }
    }
}

/// Partial game update scoped to the calling user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateGameParams {
    /// Id of the game to update.
    pub id: i32,
    /// Id of the authenticated caller; the update only applies to their game.
    pub user_id: i32,
    /// New name, if provided.
    pub name: Option<String>,
    /// New genre, if provided.
    pub genre: Option<String>,
}

impl UpdateGameParams {
    pub fn from_dto(id: i32, user_id: i32, dto: UpdateGameDto) -> Self {
        Self {
            id,
            user_id,
            name: dto.name,
            genre: dto.genre,
        }
    }
}
