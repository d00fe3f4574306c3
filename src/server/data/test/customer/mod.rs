use crate::server::{data::customer::CustomerRepository, model::customer::OauthCustomerParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod soft_delete;
mod upsert_oauth;
