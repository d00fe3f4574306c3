use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000004_create_car_table::Car, m20260116_000005_create_vendor_table::Vendor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(integer(Listing::CarId))
                    .col(integer(Listing::VendorId))
                    .col(double(Listing::Price))
                    .col(double_null(Listing::PreDiscountPrice))
                    .col(boolean(Listing::IsDiscount).default(false))
                    .col(integer(Listing::Mileage))
                    .col(integer(Listing::Year))
                    .col(json_null(Listing::OverrideSpecification))
                    .col(integer(Listing::ViewCount).default(0))
                    .col(integer(Listing::FavoriteCount).default(0))
                    .col(
                        timestamp(Listing::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Listing::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_car_id")
                            .from(Listing::Table, Listing::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_vendor_id")
                            .from(Listing::Table, Listing::VendorId)
                            .to(Vendor::Table, Vendor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    CarId,
    VendorId,
    Price,
    PreDiscountPrice,
    IsDiscount,
    Mileage,
    Year,
    OverrideSpecification,
    ViewCount,
    FavoriteCount,
    CreatedAt,
    DeletedAt,
}
