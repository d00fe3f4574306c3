//! Vendor user factory for creating test staff account entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vendor staff accounts with customizable fields.
pub struct VendorUserFactory<'a> {
    db: &'a DatabaseConnection,
    vendor_id: i32,
    username: String,
    email: String,
    password_hash: String,
    email_verified: bool,
    picture_path: Option<String>,
    picture_name: Option<String>,
}

impl<'a> VendorUserFactory<'a> {
    /// Creates a new VendorUserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"staff_{id}"` where id is auto-incremented
    /// - email: `"staff_{id}@example.com"`
    /// - password_hash: a fixed placeholder, not a valid argon2 hash
    /// - email_verified: `true`
    /// - picture: none
    pub fn new(db: &'a DatabaseConnection, vendor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            vendor_id,
            username: format!("staff_{}", id),
            email: format!("staff_{}@example.com", id),
            password_hash: "not-a-real-hash".to_string(),
            email_verified: true,
            picture_path: None,
            picture_name: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = email_verified;
        self
    }

    pub fn picture(mut self, path: impl Into<String>, name: impl Into<String>) -> Self {
        self.picture_path = Some(path.into());
        self.picture_name = Some(name.into());
        self
    }

    /// Builds and inserts the vendor user entity into the database.
    pub async fn build(self) -> Result<entity::vendor_user::Model, DbErr> {
        entity::vendor_user::ActiveModel {
            vendor_id: ActiveValue::Set(self.vendor_id),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            email_verified: ActiveValue::Set(self.email_verified),
            picture_path: ActiveValue::Set(self.picture_path),
            picture_name: ActiveValue::Set(self.picture_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vendor user with default values under the given vendor.
pub async fn create_vendor_user(
    db: &DatabaseConnection,
    vendor_id: i32,
) -> Result<entity::vendor_user::Model, DbErr> {
    VendorUserFactory::new(db, vendor_id).build().await
}
