use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoadoutDto {
    pub id: i32,
    pub name: String,
    pub weapons: Option<String>,
    pub abilities: Option<String>,
    pub stats: Option<String>,
    pub notes: Option<String>,
    pub user_id: i32,
    pub game_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a loadout.
///
/// Name and game_id are required; the free-form text fields are optional and
/// stored as-is without structural validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLoadoutDto {
    pub name: Option<String>,
    pub game_id: Option<i32>,
    pub weapons: Option<String>,
    pub abilities: Option<String>,
    pub stats: Option<String>,
    pub notes: Option<String>,
}

/// Payload for a partial loadout update. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLoadoutDto {
    pub name: Option<String>,
    pub game_id: Option<i32>,
    pub weapons: Option<String>,
    pub abilities: Option<String>,
    pub stats: Option<String>,
    pub notes: Option<String>,
}
