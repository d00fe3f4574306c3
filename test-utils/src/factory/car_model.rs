//! Car model factory for creating test model entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test car models with customizable fields.
pub struct CarModelFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    name: String,
}

impl<'a> CarModelFactory<'a> {
    /// Creates a new CarModelFactory with a unique default name.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `brand_id` - Brand this model belongs to
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            brand_id,
            name: format!("Model {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the car model entity into the database.
    pub async fn build(self) -> Result<entity::car_model::Model, DbErr> {
        entity::car_model::ActiveModel {
            brand_id: ActiveValue::Set(self.brand_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car model with default values under the given brand.
pub async fn create_model(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::car_model::Model, DbErr> {
    CarModelFactory::new(db, brand_id).build().await
}

/// Creates a car model with a specific name under the given brand.
pub async fn create_model_with_name(
    db: &DatabaseConnection,
    brand_id: i32,
    name: impl Into<String>,
) -> Result<entity::car_model::Model, DbErr> {
    CarModelFactory::new(db, brand_id).name(name).build().await
}
