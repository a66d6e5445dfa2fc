use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000002_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartnerUnit::Table)
                    .if_not_exists()
                    .col(pk_auto(PartnerUnit::Id))
                    .col(integer(PartnerUnit::CityId))
                    .col(string(PartnerUnit::Name))
                    .col(string(PartnerUnit::Address))
                    .col(string_null(PartnerUnit::Phone))
                    .col(string_null(PartnerUnit::Responsible))
                    .col(double_null(PartnerUnit::Price))
                    .col(text_null(PartnerUnit::Notes))
                    .col(boolean(PartnerUnit::Active).default(true))
                    .col(
                        timestamp_with_time_zone(PartnerUnit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(PartnerUnit::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partner_unit_city_id")
                            .from(PartnerUnit::Table, PartnerUnit::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Resolution scans active units per city
        manager
            .create_index(
                Index::create()
                    .name("idx_partner_unit_city_id_active")
                    .table(PartnerUnit::Table)
                    .col(PartnerUnit::CityId)
                    .col(PartnerUnit::Active)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartnerUnit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PartnerUnit {
    Table,
    Id,
    CityId,
    Name,
    Address,
    Phone,
    Responsible,
    Price,
    Notes,
    Active,
    CreatedAt,
    UpdatedAt,
}
