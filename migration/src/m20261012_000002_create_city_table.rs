use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000001_create_state_table::State;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(integer(City::StateId))
                    .col(string(City::Name))
                    .col(double(City::Latitude))
                    .col(double(City::Longitude))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_state_id")
                            .from(City::Table, City::StateId)
                            .to(State::Table, State::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_city_state_id")
                    .table(City::Table)
                    .col(City::StateId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    StateId,
    Name,
    Latitude,
    Longitude,
}
