use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubscriptionPackage::Table)
                    .if_not_exists()
                    .col(pk_auto(SubscriptionPackage::Id))
                    .col(string(SubscriptionPackage::PackageName))
                    .col(integer(SubscriptionPackage::CarPostSlot))
                    .col(double(SubscriptionPackage::Price))
                    .col(integer(SubscriptionPackage::DurationInDay))
                    .col(
                        timestamp(SubscriptionPackage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SubscriptionPackage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SubscriptionPackage {
    Table,
    Id,
    PackageName,
    CarPostSlot,
    Price,
    DurationInDay,
    CreatedAt,
}
