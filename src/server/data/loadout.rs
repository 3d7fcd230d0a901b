use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::loadout::{Loadout, NewLoadout, UpdateLoadoutParams};

pub struct LoadoutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoadoutRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new loadout from a validated record
    pub async fn create(&self, loadout: NewLoadout) -> Result<Loadout, DbErr> {
        let now = Utc::now();
        let entity = entity::loadout::ActiveModel {
            name: ActiveValue::Set(loadout.name),
            weapons: ActiveValue::Set(loadout.weapons),
            abilities: ActiveValue::Set(loadout.abilities),
            stats: ActiveValue::Set(loadout.stats),
            notes: ActiveValue::Set(loadout.notes),
            user_id: ActiveValue::Set(loadout.user_id),
            game_id: ActiveValue::Set(loadout.game_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Loadout::from_entity(entity))
    }

    /// Gets a loadout by id, scoped to its owner
    pub async fn get_by_id(&self, id: i32, user_id: i32) -> Result<Option<Loadout>, DbErr> {
        let entity = entity::prelude::Loadout::find_by_id(id)
            .filter(entity::loadout::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Loadout::from_entity))
    }

    /// Gets all loadouts owned by a user, most recently updated first.
    ///
    /// An optional game id narrows the list to that game's loadouts.
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
        game_id: Option<i32>,
    ) -> Result<Vec<Loadout>, DbErr> {
        let mut query = entity::prelude::Loadout::find()
            .filter(entity::loadout::Column::UserId.eq(user_id));

        if let Some(game_id) = game_id {
            query = query.filter(entity::loadout::Column::GameId.eq(game_id));
        }

        let entities = query
            .order_by_desc(entity::loadout::Column::UpdatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Loadout::from_entity).collect())
    }

    /// Applies a partial update to an owner-scoped loadout.
    ///
    /// Refreshes the update timestamp on every call. Returns `None` when no
    /// loadout with that id belongs to the user.
    pub async fn update(&self, params: UpdateLoadoutParams) -> Result<Option<Loadout>, DbErr> {
        let Some(entity) = entity::prelude::Loadout::find_by_id(params.id)
            .filter(entity::loadout::Column::UserId.eq(params.user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::loadout::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(weapons) = params.weapons {
            active_model.weapons = ActiveValue::Set(Some(weapons));
        }
        if let Some(abilities) = params.abilities {
            active_model.abilities = ActiveValue::Set(Some(abilities));
        }
        if let Some(stats) = params.stats {
            active_model.stats = ActiveValue::Set(Some(stats));
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(game_id) = params.game_id {
            active_model.game_id = ActiveValue::Set(game_id);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Loadout::from_entity(entity)))
    }

    /// Deletes an owner-scoped loadout
    ///
    /// Returns `false` when no loadout with that id belongs to the user.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Loadout::delete_many()
            .filter(entity::loadout::Column::Id.eq(id))
            .filter(entity::loadout::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
