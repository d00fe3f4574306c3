//! HTTP request handlers.
//!
//! Controllers validate access, parse query and body input into typed
//! parameters, call into the service layer, and convert the results to DTOs.
//! No business logic lives here.

pub mod auth;
pub mod catalog;
pub mod customer;
pub mod listing;
pub mod param;
pub mod review;
pub mod subscription;
pub mod vendor;
