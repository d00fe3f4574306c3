//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete listing hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Brand
/// 2. Category
/// 3. Car model (under the brand)
/// 4. Catalog car
/// 5. Vendor
/// 6. Listing
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((brand, category, model, car, vendor, listing))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::brand::Model,
        entity::category::Model,
        entity::car_model::Model,
        entity::car::Model,
        entity::vendor::Model,
        entity::listing::Model,
    ),
    DbErr,
> {
    let brand = crate::factory::brand::create_brand(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let model = crate::factory::car_model::create_model(db, brand.id).await?;
    let car = crate::factory::car::create_car(db, brand.id, category.id, model.id).await?;
    let vendor = crate::factory::vendor::create_vendor(db).await?;
    let listing = crate::factory::listing::create_listing(db, car.id, vendor.id).await?;

    Ok((brand, category, model, car, vendor, listing))
}

/// Creates a catalog car with its brand, category, and model.
///
/// Useful when a test needs several listings under the same car, or the
/// catalog rows without a listing at all.
///
/// # Returns
/// - `Ok((brand, category, model, car))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::brand::Model,
        entity::category::Model,
        entity::car_model::Model,
        entity::car::Model,
    ),
    DbErr,
> {
    let brand = crate::factory::brand::create_brand(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let model = crate::factory::car_model::create_model(db, brand.id).await?;
    let car = crate::factory::car::create_car(db, brand.id, category.id, model.id).await?;

    Ok((brand, category, model, car))
}
