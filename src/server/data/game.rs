use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::game::{Game, UpdateGameParams};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new game owned by the given user
    pub async fn create(
        &self,
        user_id: i32,
        name: String,
        genre: Option<String>,
    ) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(name),
            genre: ActiveValue::Set(genre),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Gets a game by id, scoped to its owner
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id)
            .filter(entity::game::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets all games owned by a user, ordered by name
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::UserId.eq(user_id))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Checks whether a user already has a game with the given name.
    ///
    /// `exclude_id` skips one game, so updates don't collide with themselves.
    pub async fn name_taken(
        &self,
        user_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Game::find()
            .filter(entity::game::Column::UserId.eq(user_id))
            .filter(entity::game::Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::game::Column::Id.ne(exclude_id));
        }

        let count = query.count(self.db).await?;

        Ok(count > 0)
    }

    /// Applies a partial update to an owner-scoped game
    ///
    /// Returns `None` when no game with that id belongs to the user.
    pub async fn update(&self, params: UpdateGameParams) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(params.id)
            .filter(entity::game::Column::UserId.eq(params.user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::game::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(genre) = params.genre {
            active_model.genre = ActiveValue::Set(Some(genre));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Game::from_entity(entity)))
    }

    /// Deletes an owner-scoped game together with every loadout referencing it.
    ///
    /// Both deletes run in one transaction so a failure cannot leave orphaned
    /// loadouts behind. Returns `false` when no game with that id belongs to
    /// the user.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let Some(game) = entity::prelude::Game::find_by_id(id)
            .filter(entity::game::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        entity::prelude::Loadout::delete_many()
            .filter(entity::loadout::Column::GameId.eq(game.id))
            .exec(&txn)
            .await?;

        entity::prelude::Game::delete_by_id(game.id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}
