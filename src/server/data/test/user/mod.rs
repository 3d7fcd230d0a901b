use crate::server::{data::user::UserRepository, model::user::NewUser};
use sea_orm::{DbErr, EntityTrait, ModelTrait};
use test_utils::{builder::TestBuilder, factory};

mod cascade;
mod create;
mod find;
