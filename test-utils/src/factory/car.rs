//! Catalog car factory for creating test car entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test catalog cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, brand.id, category.id, model.id)
///     .year(2022)
///     .base_price(950_000.0)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    category_id: i32,
    model_id: i32,
    year: i32,
    base_price: f64,
    specifications: serde_json::Value,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - year: `2020`
    /// - base_price: `500000.0`
    /// - specifications: a small fixed document with fuel and transmission
    pub fn new(db: &'a DatabaseConnection, brand_id: i32, category_id: i32, model_id: i32) -> Self {
        Self {
            db,
            brand_id,
            category_id,
            model_id,
            year: 2020,
            base_price: 500_000.0,
            specifications: json!({
                "fuel": "petrol",
                "transmission": "manual",
                "seats": 5
            }),
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn specifications(mut self, specifications: serde_json::Value) -> Self {
        self.specifications = specifications;
        self
    }

    /// Builds and inserts the car entity into the database.
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            brand_id: ActiveValue::Set(self.brand_id),
            category_id: ActiveValue::Set(self.category_id),
            model_id: ActiveValue::Set(self.model_id),
            year: ActiveValue::Set(self.year),
            base_price: ActiveValue::Set(self.base_price),
            specifications: ActiveValue::Set(self.specifications),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a catalog car with default values.
pub async fn create_car(
    db: &DatabaseConnection,
    brand_id: i32,
    category_id: i32,
    model_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, brand_id, category_id, model_id)
        .build()
        .await
}
