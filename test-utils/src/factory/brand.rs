//! Brand factory for creating test brand entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brands with customizable fields.
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Brand {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the brand entity into the database.
    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        entity::brand::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a brand with default values.
pub async fn create_brand(db: &DatabaseConnection) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db).build().await
}

/// Creates a brand with a specific name.
pub async fn create_brand_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db).name(name).build().await
}
