use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_brand_table::Brand;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarModel::Table)
                    .if_not_exists()
                    .col(pk_auto(CarModel::Id))
                    .col(integer(CarModel::BrandId))
                    .col(string(CarModel::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_model_brand_id")
                            .from(CarModel::Table, CarModel::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarModel {
    Table,
    Id,
    BrandId,
    Name,
}
