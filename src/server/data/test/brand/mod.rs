use crate::server::{data::brand::BrandRepository, query::page::PageSlice};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
