use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_brand_table::Brand, m20260115_000002_create_category_table::Category,
    m20260115_000003_create_car_model_table::CarModel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(integer(Car::BrandId))
                    .col(integer(Car::CategoryId))
                    .col(integer(Car::ModelId))
                    .col(integer(Car::Year))
                    .col(double(Car::BasePrice))
                    .col(json(Car::Specifications))
                    .col(
                        timestamp(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_brand_id")
                            .from(Car::Table, Car::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_category_id")
                            .from(Car::Table, Car::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_model_id")
                            .from(Car::Table, Car::ModelId)
                            .to(CarModel::Table, CarModel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    BrandId,
    CategoryId,
    ModelId,
    Year,
    BasePrice,
    Specifications,
    CreatedAt,
}
