use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::Id))
                    .col(string_uniq(Customer::Uid))
                    .col(string_null(Customer::Username))
                    .col(string_uniq(Customer::Email))
                    .col(string_null(Customer::PasswordHash))
                    .col(string(Customer::FirstName))
                    .col(string_null(Customer::LastName))
                    .col(boolean(Customer::IsOauth).default(false))
                    .col(string_null(Customer::OauthProvider))
                    .col(boolean(Customer::EmailVerified).default(false))
                    .col(timestamp_null(Customer::LastLogin))
                    .col(
                        timestamp(Customer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Customer::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    Uid,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    IsOauth,
    OauthProvider,
    EmailVerified,
    LastLogin,
    CreatedAt,
    DeletedAt,
}
