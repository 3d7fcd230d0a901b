//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique identifier to prevent
/// collisions on unique columns.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete loadout hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as owner)
/// 2. Game owned by that user
/// 3. Loadout owned by that user, referencing that game
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, game, loadout))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loadout_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::game::Model,
        entity::loadout::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let game = crate::factory::game::create_game(db, user.id).await?;
    let loadout = crate::factory::loadout::create_loadout(db, user.id, game.id).await?;

    Ok((user, game, loadout))
}

/// Creates a game and loadout owned by a specific user.
///
/// Useful when a test already has a user (for example one created through the
/// auth flow) and needs owned records for it.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User entity to own the created records
///
/// # Returns
/// - `Ok((game, loadout))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loadout_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::game::Model, entity::loadout::Model), DbErr> {
    let game = crate::factory::game::create_game(db, user.id).await?;
    let loadout = crate::factory::loadout::create_loadout(db, user.id, game.id).await?;

    Ok((game, loadout))
}
