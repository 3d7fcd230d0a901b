use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        game::{CreateGameDto, GameDto, UpdateGameDto},
        loadout::{CreateLoadoutDto, LoadoutDto, UpdateLoadoutDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::{auth, game, loadout},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        game::get_games,
        game::get_game,
        game::create_game,
        game::update_game,
        game::delete_game,
        loadout::get_loadouts,
        loadout::get_loadout,
        loadout::create_loadout,
        loadout::update_loadout,
        loadout::delete_loadout,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        RegisterDto,
        LoginDto,
        GameDto,
        CreateGameDto,
        UpdateGameDto,
        LoadoutDto,
        CreateLoadoutDto,
        UpdateLoadoutDto,
    )),
    tags(
        (name = "auth", description = "Account registration and session management"),
        (name = "game", description = "Per-user game categories"),
        (name = "loadout", description = "Per-user loadout presets"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/games", get(game::get_games).post(game::create_game))
        .route(
            "/api/games/{id}",
            get(game::get_game)
                .put(game::update_game)
                .delete(game::delete_game),
        )
        .route(
            "/api/loadouts",
            get(loadout::get_loadouts).post(loadout::create_loadout),
        )
        .route(
            "/api/loadouts/{id}",
            get(loadout::get_loadout)
                .put(loadout::update_loadout)
                .delete(loadout::delete_loadout),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
