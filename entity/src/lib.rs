//! SeaORM entity models for the armory database schema.

pub mod prelude;

pub mod game;
pub mod loadout;
pub mod user;
