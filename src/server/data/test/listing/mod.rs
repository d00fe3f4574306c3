use crate::server::{
    data::listing::ListingRepository,
    error::{query::QueryError, AppError},
    query::{
        filter::{ListingFilter, SortField, SortOrder},
        page::PageSlice,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_price_stats;
mod get_recommended;
mod log_view;
mod search;
mod soft_delete;
