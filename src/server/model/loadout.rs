//! Loadout domain models and parameters.
//!
//! A loadout is a saved weapon/ability/stat preset. The weapons, abilities,
//! stats, and notes fields are opaque text stored exactly as the client sent
//! them.

use chrono::{DateTime, Utc};

use crate::model::loadout::{CreateLoadoutDto, LoadoutDto, UpdateLoadoutDto};

/// A saved preset owned by one user and tied to one of their games.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadout {
    /// Primary key of the loadout.
    pub id: i32,
    /// Display name of the preset.
    pub name: String,
    /// Opaque weapons text.
    pub weapons: Option<String>,
    /// Opaque abilities text.
    pub abilities: Option<String>,
    /// Opaque stats text.
    pub stats: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Id of the owning user.
    pub user_id: i32,
    /// Id of the game the preset belongs to; always owned by the same user.
    pub game_id: i32,
    /// When the loadout was created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation; drives most-recently-updated ordering.
    pub updated_at: DateTime<Utc>,
}

impl Loadout {
    /// Converts the loadout domain model to a DTO for API responses.
    pub fn into_dto(self) -> LoadoutDto {
        LoadoutDto {
            id: self.id,
            name: self.name,
            weapons: self.weapons,
            abilities: self.abilities,
            stats: self.stats,
            notes: self.notes,
            user_id: self.user_id,
            game_id: self.game_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a loadout domain model at the repository boundary.
    pub fn from_entity(entity: entity::loadout::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            weapons: entity.weapons,
            abilities: entity.abilities,
            stats: entity.stats,
            notes: entity.notes,
            user_id: entity.user_id,
            game_id: entity.game_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Unvalidated loadout creation input scoped to the calling user.
#[derive(Debug, Clone)]
pub struct CreateLoadoutParams {
    /// Id of the authenticated caller who will own the loadout.
    pub user_id: i32,
    /// Requested name; required, validated in the service layer.
    pub name: Option<String>,
    /// Target game; required and must belong to the caller.
    pub game_id: Option<i32>,
    pub weapons: Option<String>,
    pub abilities: Option<String>,
    pub stats: Option<String>,
    pub notes: Option<String>,
}

impl CreateLoadoutParams {
    pub fn from_dto(user_id: i32, dto: CreateLoadoutDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            game_id: dto.game_id,
            weapons: dto.weapons,
            abilities: dto.abilities,
            stats: dto.stats,
            notes: dto.notes,
        }
    }
}

/// Validated record for inserting a new loadout row.
#[derive(Debug, Clone)]
pub struct NewLoadout {
    pub user_id: i32,
    pub game_id: i32,
    pub name: String,
    pub weapons: Option<String>,
    pub abilities: Option<String>,
    pub stats: Option<String>,
    pub notes: Option<String>,
}

/// Partial loadout update scoped to the calling user.
///
/// `None` fields are left unchanged. A provided `game_id` is re-validated
/// against the caller's games before the update is applied.
#[derive(Debug, Clone)]
pub struct UpdateLoadoutParams {
    /// Id of the loadout to update.
    pub id: i32,
    /// Id of the authenticated caller; the update only applies to their loadout.
    pub user_id: i32,
    pub name: Option<String>,
    pub game_id: Option<i32>,
    pub weapons: Option<String>,
    pub abilities: Option<String>,
    pub stats: Option<String>,
    pub notes: Option<String>,
}

impl UpdateLoadoutParams {
    pub fn from_dto(id: i32, user_id: i32, dto: UpdateLoadoutDto) -> Self {
        Self {
            id,
            user_id,
            name: dto.name,
            game_id: dto.game_id,
            weapons: dto.weapons,
            abilities: dto.abilities,
            stats: dto.stats,
            notes: dto.notes,
        }
    }
}
