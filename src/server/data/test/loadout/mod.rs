use crate::server::{
    data::loadout::LoadoutRepository,
    model::loadout::{NewLoadout, UpdateLoadoutParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;
