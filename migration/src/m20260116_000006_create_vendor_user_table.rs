use sea_orm_migration::{prelude::*, schema::*};

use super::m20260116_000005_create_vendor_table::Vendor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VendorUser::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorUser::Id))
                    .col(integer(VendorUser::VendorId))
                    .col(string_uniq(VendorUser::Username))
                    .col(string(VendorUser::Email))
                    .col(string(VendorUser::PasswordHash))
                    .col(boolean(VendorUser::EmailVerified).default(false))
                    .col(string_null(VendorUser::PicturePath))
                    .col(string_null(VendorUser::PictureName))
                    .col(
                        timestamp(VendorUser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vendor_user_vendor_id")
                            .from(VendorUser::Table, VendorUser::VendorId)
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
            .drop_table(Table::drop().table(VendorUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VendorUser {
    Table,
    Id,
    VendorId,
    Username,
    Email,
    PasswordHash,
    EmailVerified,
    PicturePath,
    PictureName,
    CreatedAt,
}
