use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{CreateGameParams, Game, UpdateGameParams},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all games owned by the user, ordered by name
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        let games = repo.get_by_user_id(user_id).await?;

        Ok(games)
    }

    /// Gets a specific game by id, scoped to the user
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<Option<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        let game = repo.get_by_id(id, user_id).await?;

        Ok(game)
    }

    /// Creates a new game for the user.
    ///
    /// Rejects a missing or empty name and a name the user already uses for
    /// another game.
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, AppError> {
        let Some(name) = params.name.filter(|n| !n.is_empty()) else {
            return Err(AppError::BadRequest("Name is required".to_string()));
        };

        let repo = GameRepository::new(self.db);

        if repo.name_taken(params.user_id, &name, None).await? {
            return Err(AppError::BadRequest(
                "Game with this name already exists".to_string(),
            ));
        }

        let game = repo.create(params.user_id, name, params.genre).await?;

        Ok(game)
    }

    /// Applies a partial update to one of the user's games.
    ///
    /// A changed name is re-checked for uniqueness against the user's other
    /// games. Returns `None` if the game doesn't exist or isn't theirs.
    pub async fn update(&self, params: UpdateGameParams) -> Result<Option<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        if let Some(name) = &params.name {
            if repo
                .name_taken(params.user_id, name, Some(params.id))
                .await?
            {
                return Err(AppError::BadRequest(
                    "Game with this name already exists".to_string(),
                ));
            }
        }

        let game = repo.update(params).await?;

        Ok(game)
    }

    /// Deletes one of the user's games along with all of its loadouts
    ///
    /// Returns `true` if deleted, `false` if the game doesn't exist or isn't theirs.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, AppError> {
        let repo = GameRepository::new(self.db);

        let deleted = repo.delete(id, user_id).await?;

        Ok(deleted)
    }
}
