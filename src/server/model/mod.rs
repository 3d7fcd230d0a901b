//! Domain models and operation parameter types.
//!
//! Domain models are what the service and data layers trade in; parameter
//! types carry validated-or-not operation input from controllers down through
//! services. Conversion from entity models happens at the repository boundary,
//! conversion to DTOs at the controller boundary.

pub mod game;
pub mod loadout;
pub mod user;
