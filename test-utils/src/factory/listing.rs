//! Listing factory for creating test listing entities.
//!
//! This module provides factory methods for creating listing entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// Provides a builder pattern for creating listing entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::listing::ListingFactory;
///
/// let listing = ListingFactory::new(&db, car.id, vendor.id)
///     .price(750_000.0)
///     .mileage(42_000)
///     .view_count(12)
///     .build()
///     .await?;
/// ```
pub struct ListingFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: i32,
    vendor_id: i32,
    price: f64,
    pre_discount_price: Option<f64>,
    is_discount: bool,
    mileage: i32,
    year: i32,
    override_specification: Option<serde_json::Value>,
    view_count: i32,
    favorite_count: i32,
    created_at: chrono::DateTime<Utc>,
    deleted_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> ListingFactory<'a> {
    /// Creates a new ListingFactory with default values.
    ///
    /// Defaults:
    /// - price: `600000.0`, no discount
    /// - mileage: `50000`
    /// - year: `2020`
    /// - no specification override
    /// - view and favorite counts: `0`
    /// - created now, not deleted
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `car_id` - Catalog car this listing offers
    /// - `vendor_id` - Vendor selling the car
    pub fn new(db: &'a DatabaseConnection, car_id: i32, vendor_id: i32) -> Self {
        Self {
            db,
            car_id,
            vendor_id,
            price: 600_000.0,
            pre_discount_price: None,
            is_discount: false,
            mileage: 50_000,
            year: 2020,
            override_specification: None,
            view_count: 0,
            favorite_count: 0,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn discount(mut self, pre_discount_price: f64) -> Self {
        self.pre_discount_price = Some(pre_discount_price);
        self.is_discount = true;
        self
    }

    pub fn mileage(mut self, mileage: i32) -> Self {
        self.mileage = mileage;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn override_specification(mut self, spec: serde_json::Value) -> Self {
        self.override_specification = Some(spec);
        self
    }

    pub fn view_count(mut self, view_count: i32) -> Self {
        self.view_count = view_count;
        self
    }

    pub fn favorite_count(mut self, favorite_count: i32) -> Self {
        self.favorite_count = favorite_count;
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the listing as soft deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the listing entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::listing::Model)` - Created listing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::listing::Model, DbErr> {
        entity::listing::ActiveModel {
            car_id: ActiveValue::Set(self.car_id),
            vendor_id: ActiveValue::Set(self.vendor_id),
            price: ActiveValue::Set(self.price),
            pre_discount_price: ActiveValue::Set(self.pre_discount_price),
            is_discount: ActiveValue::Set(self.is_discount),
            mileage: ActiveValue::Set(self.mileage),
            year: ActiveValue::Set(self.year),
            override_specification: ActiveValue::Set(self.override_specification),
            view_count: ActiveValue::Set(self.view_count),
            favorite_count: ActiveValue::Set(self.favorite_count),
            created_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values.
///
/// Shorthand for `ListingFactory::new(db, car_id, vendor_id).build().await`.
pub async fn create_listing(
    db: &DatabaseConnection,
    car_id: i32,
    vendor_id: i32,
) -> Result<entity::listing::Model, DbErr> {
    ListingFactory::new(db, car_id, vendor_id).build().await
}
