use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::vendor::{CreateVendorParams, RegisterVendorUserParams};

pub struct VendorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vendor profile.
    pub async fn create(&self, params: CreateVendorParams) -> Result<entity::vendor::Model, DbErr> {
        entity::vendor::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            logo_path: ActiveValue::Set(None),
            logo_name: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vendor::Model>, DbErr> {
        entity::prelude::Vendor::find_by_id(id).one(self.db).await
    }

    /// Stores the vendor's uploaded logo location.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated vendor
    /// - `Ok(None)` - No such vendor
    /// - `Err(DbErr)` - Database error
    pub async fn set_logo(
        &self,
        id: i32,
        path: String,
        name: String,
    ) -> Result<Option<entity::vendor::Model>, DbErr> {
        let Some(vendor) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::vendor::ActiveModel = vendor.into();
        active_model.logo_path = ActiveValue::Set(Some(path));
        active_model.logo_name = ActiveValue::Set(Some(name));

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Resolves each vendor's display picture from its first user account.
    ///
    /// Returns a map of vendor id to the `(path, name)` pair of the first
    /// user's profile picture. Vendors whose first user has no picture are
    /// absent from the map.
    pub async fn get_display_pictures(
        &self,
        vendor_ids: &[i32],
    ) -> Result<HashMap<i32, (String, String)>, DbErr> {
        if vendor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::VendorUser::find()
            .filter(entity::vendor_user::Column::VendorId.is_in(vendor_ids.iter().copied()))
            .order_by_asc(entity::vendor_user::Column::Id)
            .all(self.db)
            .await?;

        // First user per vendor wins, whether or not it carries a picture.
        let mut seen = HashSet::new();
        let mut pictures = HashMap::new();
        for user in users {
            if !seen.insert(user.vendor_id) {
                continue;
            }
            if let (Some(path), Some(name)) = (user.picture_path, user.picture_name) {
                pictures.insert(user.vendor_id, (path, name));
            }
        }

        Ok(pictures)
    }
}

pub struct VendorUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a staff account under a vendor.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account
    /// - `Err(DbErr)` - Database error (duplicate username or unknown vendor)
    pub async fn create(
        &self,
        params: RegisterVendorUserParams,
    ) -> Result<entity::vendor_user::Model, DbErr> {
        entity::vendor_user::ActiveModel {
            vendor_id: ActiveValue::Set(params.vendor_id),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            email_verified: ActiveValue::Set(false),
            picture_path: ActiveValue::Set(None),
            picture_name: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::vendor_user::Model>, DbErr> {
        entity::prelude::VendorUser::find()
            .filter(entity::vendor_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::vendor_user::Model>, DbErr> {
        entity::prelude::VendorUser::find_by_id(id).one(self.db).await
    }

    /// Stores an account's uploaded profile picture location.
    pub async fn set_picture(
        &self,
        id: i32,
        path: String,
        name: String,
    ) -> Result<Option<entity::vendor_user::Model>, DbErr> {
        let Some(user) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::vendor_user::ActiveModel = user.into();
        active_model.picture_path = ActiveValue::Set(Some(path));
        active_model.picture_name = ActiveValue::Set(Some(name));

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }
}
