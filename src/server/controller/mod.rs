//! HTTP request handlers grouped by resource.
//!
//! Controllers resolve the session through the auth guard, convert DTOs to
//! operation parameters, call into the service layer, and convert domain
//! models back to DTOs for the response.

pub mod auth;
pub mod game;
pub mod loadout;
