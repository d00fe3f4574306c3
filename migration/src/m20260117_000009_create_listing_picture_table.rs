use sea_orm_migration::{prelude::*, schema::*};

use super::m20260117_000008_create_listing_table::Listing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListingPicture::Table)
                    .if_not_exists()
                    .col(pk_auto(ListingPicture::Id))
                    .col(integer(ListingPicture::ListingId))
                    .col(string(ListingPicture::Path))
                    .col(string(ListingPicture::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listing_picture_listing_id")
                            .from(ListingPicture::Table, ListingPicture::ListingId)
                            .to(Listing::Table, Listing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListingPicture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListingPicture {
    Table,
    Id,
    ListingId,
    Path,
    Name,
}
