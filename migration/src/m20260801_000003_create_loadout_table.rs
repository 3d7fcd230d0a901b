use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000001_create_user_table::User, m20260801_000002_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Loadout::Table)
                    .if_not_exists()
                    .col(pk_auto(Loadout::Id))
                    .col(string(Loadout::Name))
                    .col(text_null(Loadout::Weapons))
                    .col(text_null(Loadout::Abilities))
                    .col(text_null(Loadout::Stats))
                    .col(text_null(Loadout::Notes))
                    .col(integer(Loadout::UserId))
                    .col(integer(Loadout::GameId))
                    .col(timestamp_with_time_zone(Loadout::CreatedAt))
                    .col(timestamp_with_time_zone(Loadout::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loadout_user_id")
                            .from(Loadout::Table, Loadout::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loadout_game_id")
                            .from(Loadout::Table, Loadout::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Loadout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Loadout {
    Table,
    Id,
    Name,
    Weapons,
    Abilities,
    Stats,
    Notes,
    UserId,
    GameId,
    CreatedAt,
    UpdatedAt,
}
