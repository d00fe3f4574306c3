pub mod api;
pub mod auth;
pub mod catalog;
pub mod customer;
pub mod listing;
pub mod review;
pub mod stats;
pub mod subscription;
pub mod vendor;
