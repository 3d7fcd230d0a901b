use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, loadout::LoadoutRepository},
    error::AppError,
    model::loadout::{CreateLoadoutParams, Loadout, NewLoadout, UpdateLoadoutParams},
};

pub struct LoadoutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadoutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all loadouts owned by the user, most recently updated first.
    ///
    /// An optional game id narrows the list to that game's loadouts. The
    /// filter stays scoped to the user; another user's game id simply yields
    /// an empty list.
    pub async fn get_all(
        &self,
        user_id: i32,
        game_id: Option<i32>,
    ) -> Result<Vec<Loadout>, AppError> {
        let repo = LoadoutRepository::new(self.db);

        let loadouts = repo.get_by_user_id(user_id, game_id).await?;

        Ok(loadouts)
    }

    /// Gets a specific loadout by id, scoped to the user
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<Option<Loadout>, AppError> {
        let repo = LoadoutRepository::new(self.db);

        let loadout = repo.get_by_id(id, user_id).await?;

        Ok(loadout)
    }

    /// Creates a new loadout for the user.
    ///
    /// Requires a non-empty name and a game id resolving to a game the user
    /// owns; a game owned by someone else is indistinguishable from a missing
    /// one and fails with not-found.
    pub async fn create(&self, params: CreateLoadoutParams) -> Result<Loadout, AppError> {
        let Some(name) = params.name.filter(|n| !n.is_empty()) else {
            return Err(AppError::BadRequest("Name is required".to_string()));
        };
        let Some(game_id) = params.game_id else {
            return Err(AppError::BadRequest("Game ID is required".to_string()));
        };

        let game_repo = GameRepository::new(self.db);
        if game_repo.get_by_id(game_id, params.user_id).await?.is_none() {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        let repo = LoadoutRepository::new(self.db);
        let loadout = repo
            .create(NewLoadout {
                user_id: params.user_id,
                game_id,
                name,
                weapons: params.weapons,
                abilities: params.abilities,
                stats: params.stats,
                notes: params.notes,
            })
            .await?;

        Ok(loadout)
    }

    /// Applies a partial update to one of the user's loadouts.
    ///
    /// A changed game id is re-validated against the user's games before the
    /// update is applied. Returns `None` if the loadout doesn't exist or isn't
    /// theirs.
    pub async fn update(&self, params: UpdateLoadoutParams) -> Result<Option<Loadout>, AppError> {
        if let Some(game_id) = params.game_id {
            let game_repo = GameRepository::new(self.db);
            if game_repo.get_by_id(game_id, params.user_id).await?.is_none() {
                return Err(AppError::NotFound("Game not found".to_string()));
            }
        }

        let repo = LoadoutRepository::new(self.db);

        let loadout = repo.update(params).await?;

        Ok(loadout)
    }

    /// Deletes one of the user's loadouts
    ///
    /// Returns `true` if deleted, `false` if the loadout doesn't exist or isn't theirs.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, AppError> {
        let repo = LoadoutRepository::new(self.db);

        let deleted = repo.delete(id, user_id).await?;

        Ok(deleted)
    }
}
