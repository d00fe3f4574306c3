use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260117_000007_create_customer_table::Customer,
    m20260117_000008_create_listing_table::Listing,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListingView::Table)
                    .if_not_exists()
                    .col(pk_auto(ListingView::Id))
                    .col(integer(ListingView::ListingId))
                    .col(integer_null(ListingView::CustomerId))
                    .col(
                        timestamp(ListingView::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_view_listing_id")
                            .from(ListingView::Table, ListingView::ListingId)
                            .to(Listing::Table, Listing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_view_customer_id")
                            .from(ListingView::Table, ListingView::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListingView::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListingView {
    Table,
    Id,
    ListingId,
    CustomerId,
    CreatedAt,
}
