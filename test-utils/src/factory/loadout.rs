//! Loadout factory for creating test loadout entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test loadouts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::loadout::LoadoutFactory;
///
/// let loadout = LoadoutFactory::new(&db, user.id, game.id)
///     .name("Sniper")
///     .weapons("Operator, Sheriff")
///     .build()
///     .await?;
/// ```
pub struct LoadoutFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    weapons: Option<String>,
    abilities: Option<String>,
    stats: Option<String>,
    notes: Option<String>,
    user_id: i32,
    game_id: i32,
    updated_at: Option<DateTime<Utc>>,
}

impl<'a> LoadoutFactory<'a> {
    /// Creates a new LoadoutFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Loadout {id}"` where id is auto-incremented
    /// - weapons/abilities/stats/notes: `None`
    /// - updated_at: insertion time
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user
    /// - `game_id` - Id of the game the loadout belongs to
    pub fn new(db: &'a DatabaseConnection, user_id: i32, game_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Loadout {}", id),
            weapons: None,
            abilities: None,
            stats: None,
            notes: None,
            user_id,
            game_id,
            updated_at: None,
        }
    }

    /// Sets the name for the loadout.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weapons text for the loadout.
    pub fn weapons(mut self, weapons: impl Into<String>) -> Self {
        self.weapons = Some(weapons.into());
        self
    }

    /// Sets the abilities text for the loadout.
    pub fn abilities(mut self, abilities: impl Into<String>) -> Self {
        self.abilities = Some(abilities.into());
        self
    }

    /// Sets the stats text for the loadout.
    pub fn stats(mut self, stats: impl Into<String>) -> Self {
        self.stats = Some(stats.into());
        self
    }

    /// Sets the notes text for the loadout.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets an explicit update timestamp.
    ///
    /// Useful for tests that assert on most-recently-updated ordering.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds and inserts the loadout entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::loadout::Model)` - Created loadout entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::loadout::Model, DbErr> {
        let now = Utc::now();
        entity::loadout::ActiveModel {
            name: ActiveValue::Set(self.name),
            weapons: ActiveValue::Set(self.weapons),
            abilities: ActiveValue::Set(self.abilities),
            stats: ActiveValue::Set(self.stats),
            notes: ActiveValue::Set(self.notes),
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(self.updated_at.unwrap_or(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a loadout with default values owned by the given user and game.
///
/// Shorthand for `LoadoutFactory::new(db, user_id, game_id).build().await`.
pub async fn create_loadout(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
) -> Result<entity::loadout::Model, DbErr> {
    LoadoutFactory::new(db, user_id, game_id).build().await
}
