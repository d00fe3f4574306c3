//! Vendor factory for creating test dealership entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vendors with customizable fields.
pub struct VendorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    logo_path: Option<String>,
    logo_name: Option<String>,
}

impl<'a> VendorFactory<'a> {
    /// Creates a new VendorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vendor {id}"` where id is auto-incremented
    /// - address: `"{id} Test Street"`
    /// - logo: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vendor {}", id),
            address: format!("{} Test Street", id),
            logo_path: None,
            logo_name: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn logo(mut self, path: impl Into<String>, name: impl Into<String>) -> Self {
        self.logo_path = Some(path.into());
        self.logo_name = Some(name.into());
        self
    }

    /// Builds and inserts the vendor entity into the database.
    pub async fn build(self) -> Result<entity::vendor::Model, DbErr> {
        entity::vendor::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            logo_path: ActiveValue::Set(self.logo_path),
            logo_name: ActiveValue::Set(self.logo_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vendor with default values.
pub async fn create_vendor(db: &DatabaseConnection) -> Result<entity::vendor::Model, DbErr> {
    VendorFactory::new(db).build().await
}

/// Creates a vendor with a specific name.
pub async fn create_vendor_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::vendor::Model, DbErr> {
    VendorFactory::new(db).name(name).build().await
}
