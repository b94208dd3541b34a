use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Creature::Table)
                    .if_not_exists()
                    .col(pk_auto(Creature::Id))
                    .col(string_len(Creature::Name, 100))
                    .col(string_len(Creature::Kind, 50))
                    .col(integer(Creature::Level))
                    .col(double(Creature::Attack))
                    .col(double(Creature::Defense))
                    .col(integer(Creature::Hp))
                    .col(text_null(Creature::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Creature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Creature {
    Table,
    Id,
    Name,
    Kind,
    Level,
    Attack,
    Defense,
    Hp,
    Description,
}
