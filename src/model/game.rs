use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub name: String,
    pub genre: Option<String>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a game. Name is required, genre optional.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGameDto {
    pub name: Option<String>,
    pub genre: Option<String>,
}

/// Payload for a partial game update. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGameDto {
    pub name: Option<String>,
    pub genre: Option<String>,
}
