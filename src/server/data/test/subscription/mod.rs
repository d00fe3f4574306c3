use crate::server::{
    data::subscription::SubscriptionRepository, error::AppError,
    model::subscription::CreateSubscriptionPackageParams, service::subscription::SubscriptionService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
