use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        loadout::{CreateLoadoutDto, LoadoutDto, UpdateLoadoutDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::loadout::{CreateLoadoutParams, UpdateLoadoutParams},
        service::loadout::LoadoutService,
        state::AppState,
    },
};

/// Tag for grouping loadout endpoints in OpenAPI documentation
pub static LOADOUT_TAG: &str = "loadout";

#[derive(Deserialize)]
pub struct LoadoutListParams {
    pub game_id: Option<i32>,
}

/// Get all loadouts owned by the caller.
///
/// Returns the caller's loadouts ordered by most recently updated first. An
/// optional `game_id` query parameter narrows the list to that game's
/// loadouts, still scoped to the caller.
///
/// # Returns
/// - `200 OK` - List of loadouts
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/loadouts",
    tag = LOADOUT_TAG,
    params(
        ("game_id" = Option<i32>, Query, description = "Only return loadouts for this game")
    ),
    responses(
        (status = 200, description = "List of the caller's loadouts, most recently updated first", body = [LoadoutDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loadouts(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoadoutListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = LoadoutService::new(&state.db);

    let loadouts = service.get_all(user.id, params.game_id).await?;

    let loadouts: Vec<LoadoutDto> = loadouts.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(loadouts)))
}

/// Get a specific loadout by id.
///
/// # Returns
/// - `200 OK` - The loadout
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Loadout doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/loadouts/{id}",
    tag = LOADOUT_TAG,
    params(
        ("id" = i32, Path, description = "Loadout id")
    ),
    responses(
        (status = 200, description = "The loadout", body = LoadoutDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Loadout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_loadout(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = LoadoutService::new(&state.db);

    let loadout = service
        .get_by_id(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Loadout not found".to_string()))?;

    Ok((StatusCode::OK, Json(loadout.into_dto())))
}

/// Create a new loadout.
///
/// The name is required, and the game id must resolve to a game owned by the
/// caller. Weapons, abilities, stats, and notes are opaque text stored as-is.
///
/// # Returns
/// - `201 Created` - Successfully created loadout
/// - `400 Bad Request` - Missing name or game id
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Game doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/loadouts",
    tag = LOADOUT_TAG,
    request_body = CreateLoadoutDto,
    responses(
        (status = 201, description = "Successfully created loadout", body = LoadoutDto),
        (status = 400, description = "Missing name or game id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_loadout(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLoadoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = LoadoutService::new(&state.db);

    let params = CreateLoadoutParams::from_dto(user.id, payload);

    let loadout = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(loadout.into_dto())))
}

/// Update an existing loadout.
///
/// Partial update: omitted fields are left unchanged. A changed game id is
/// re-validated against the caller's games. Every successful update refreshes
/// the loadout's update timestamp.
///
/// # Returns
/// - `200 OK` - Successfully updated loadout
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Loadout or new game doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/loadouts/{id}",
    tag = LOADOUT_TAG,
    params(
        ("id" = i32, Path, description = "Loadout id")
    ),
    request_body = UpdateLoadoutDto,
    responses(
        (status = 200, description = "Successfully updated loadout", body = LoadoutDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Loadout or game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_loadout(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLoadoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = LoadoutService::new(&state.db);

    let params = UpdateLoadoutParams::from_dto(id, user.id, payload);

    let loadout = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound("Loadout not found".to_string()))?;

    Ok((StatusCode::OK, Json(loadout.into_dto())))
}

/// Delete a loadout.
///
/// # Returns
/// - `204 No Content` - Successfully deleted loadout
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Loadout doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/loadouts/{id}",
    tag = LOADOUT_TAG,
    params(
        ("id" = i32, Path, description = "Loadout id")
    ),
    responses(
        (status = 204, description = "Successfully deleted loadout"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Loadout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_loadout(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = LoadoutService::new(&state.db);

    let deleted = service.delete(id, user.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Loadout not found".to_string()))
    }
}
