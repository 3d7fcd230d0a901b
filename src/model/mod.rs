//! Wire DTOs shared by every API endpoint.
//!
//! These types define the JSON bodies clients send and receive. Conversion to
//! and from domain models happens at the controller boundary.

pub mod api;
pub mod game;
pub mod loadout;
pub mod user;
