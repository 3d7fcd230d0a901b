use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::game::{CreateGameParams, UpdateGameParams},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Get all games owned by the caller.
///
/// Returns the caller's games ordered by name. Other users' games are never
/// visible.
///
/// # Returns
/// - `200 OK` - List of games
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "List of the caller's games ordered by name", body = [GameDto]),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = GameService::new(&state.db);

    let games = service.get_all(user.id).await?;

    let games: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games)))
}

/// Get a specific game by id.
///
/// # Returns
/// - `200 OK` - The game
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Game doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "The game", body = GameDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = GameService::new(&state.db);

    let game = service
        .get_by_id(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Create a new game.
///
/// The name is required and must be unique among the caller's games; the
/// genre is optional.
///
/// # Returns
/// - `201 Created` - Successfully created game
/// - `400 Bad Request` - Missing name or duplicate name
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto),
        (status = 400, description = "Missing name or duplicate name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = GameService::new(&state.db);

    let params = CreateGameParams::from_dto(user.id, payload);

    let game = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Update an existing game.
///
/// Partial update: omitted fields are left unchanged. A changed name is
/// re-checked for uniqueness against the caller's other games.
///
/// # Returns
/// - `200 OK` - Successfully updated game
/// - `400 Bad Request` - New name already used by another of the caller's games
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Game doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Duplicate name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = GameService::new(&state.db);

    let params = UpdateGameParams::from_dto(id, user.id, payload);

    let game = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game.
///
/// Removes the game together with every loadout referencing it, so no
/// orphaned loadout survives.
///
/// # Returns
/// - `204 No Content` - Successfully deleted game and its loadouts
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Game doesn't exist or belongs to another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    responses(
        (status = 204, description = "Successfully deleted game and its loadouts"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let service = GameService::new(&state.db);

    let deleted = service.delete(id, user.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Game not found".to_string()))
    }
}
