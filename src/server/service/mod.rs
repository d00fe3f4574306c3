//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **View Shaping**: Reshaping denormalized rows into flat API view models

pub mod auth;
pub mod catalog;
pub mod customer;
pub mod file;
pub mod listing;
pub mod oauth;
pub mod review;
pub mod subscription;
pub mod vendor;
