//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let brand = factory::brand::create_brand(&db).await?;
//!     let vendor = factory::vendor::create_vendor(&db).await?;
//!
//!     // Create a listing with its full dependency chain
//!     let (brand, category, model, car, vendor, listing) =
//!         factory::helpers::create_listing_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let listing = factory::listing::ListingFactory::new(&db, car.id, vendor.id)
//!     .price(750_000.0)
//!     .mileage(42_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `brand` - Create brand entities
//! - `category` - Create category entities
//! - `car_model` - Create car model entities
//! - `car` - Create catalog car entities
//! - `vendor` - Create vendor entities
//! - `vendor_user` - Create vendor staff account entities
//! - `customer` - Create customer entities
//! - `listing` - Create listing entities
//! - `favorite` - Create favorite join rows
//! - `review` - Create customer car-rating rows
//! - `subscription_package` - Create vendor posting plans
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod brand;
pub mod car;
pub mod car_model;
pub mod category;
pub mod customer;
pub mod favorite;
pub mod helpers;
pub mod listing;
pub mod review;
pub mod subscription_package;
pub mod vendor;
pub mod vendor_user;

// Re-export commonly used factory functions for concise usage
pub use brand::create_brand;
pub use car::create_car;
pub use car_model::create_model;
pub use category::create_category;
pub use customer::create_customer;
pub use favorite::create_favorite;
pub use listing::create_listing;
pub use review::create_review;
pub use subscription_package::create_subscription_package;
pub use vendor::create_vendor;
pub use vendor_user::create_vendor_user;
