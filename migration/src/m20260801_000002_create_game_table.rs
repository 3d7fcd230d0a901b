use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Name))
                    .col(string_null(Game::Genre))
                    .col(integer(Game::UserId))
                    .col(timestamp_with_time_zone(Game::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_user_id")
                            .from(Game::Table, Game::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Game names are unique per owner, not globally
        manager
            .create_index(
                Index::create()
                    .name("idx_game_user_id_name")
                    .table(Game::Table)
                    .col(Game::UserId)
                    .col(Game::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Name,
    Genre,
    UserId,
    CreatedAt,
}
