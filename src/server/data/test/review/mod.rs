use crate::server::{
    data::review::ReviewRepository, error::AppError, model::review::CreateReviewParams,
    service::review::ReviewService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod average_rating;
mod create;
