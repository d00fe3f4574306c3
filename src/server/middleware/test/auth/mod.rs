use crate::server::{
    data::vendor::VendorUserRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{CustomerGuard, VendorGuard},
        session::{CustomerSession, VendorSession},
    },
    model::vendor::RegisterVendorUserParams,
};
use test_utils::{builder::TestBuilder, factory};

mod require_customer;
mod require_vendor;
