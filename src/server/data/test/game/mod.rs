use crate::server::{data::game::GameRepository, model::game::UpdateGameParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_by_user_id;
mod name_taken;
mod update;
