use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_user_table::User;
use super::m20251020_000002_create_creature_table::Creature;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::Id))
                    .col(integer(Assignment::UserId))
                    .col(integer(Assignment::CreatureId))
                    .col(string_len_null(Assignment::Nickname, 100))
                    .col(timestamp_with_time_zone(Assignment::AssignedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_user_id")
                            .from(Assignment::Table, Assignment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_creature_id")
                            .from(Assignment::Table, Assignment::CreatureId)
                            .to(Creature::Table, Creature::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_assignment_user_creature_unique")
                            .col(Assignment::UserId)
                            .col(Assignment::CreatureId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    UserId,
    CreatureId,
    Nickname,
    AssignedAt,
}
