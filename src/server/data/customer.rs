use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::customer::{
    OauthCustomerParams, RegisterCustomerParams, UpdateCustomerParams,
};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a local (password) customer account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created customer
    /// - `Err(DbErr)` - Database error (duplicate email or uid)
    pub async fn create(
        &self,
        params: RegisterCustomerParams,
    ) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            uid: ActiveValue::Set(params.uid),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(Some(params.password_hash)),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            is_oauth: ActiveValue::Set(false),
            oauth_provider: ActiveValue::Set(None),
            email_verified: ActiveValue::Set(false),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds or creates the customer for an OAuth callback, keyed by email.
    ///
    /// A returning customer is matched by email regardless of which provider
    /// they used before. New OAuth accounts arrive with a verified email and
    /// no password hash.
    ///
    /// # Returns
    /// - `Ok(Model)` - The existing or newly created customer
    /// - `Err(DbErr)` - Database error
    pub async fn upsert_oauth(
        &self,
        params: OauthCustomerParams,
    ) -> Result<entity::customer::Model, DbErr> {
        if let Some(existing) = self.find_by_email(&params.email).await? {
            return Ok(existing);
        }

        entity::customer::ActiveModel {
            uid: ActiveValue::Set(params.uid),
            username: ActiveValue::Set(None),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(None),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            is_oauth: ActiveValue::Set(true),
            oauth_provider: ActiveValue::Set(Some(params.provider)),
            email_verified: ActiveValue::Set(true),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a non-deleted customer by login email.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .filter(entity::customer::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id)
            .filter(entity::customer::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Updates a customer's profile fields.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated customer
    /// - `Ok(None)` - No such customer, or the account was deleted
    /// - `Err(DbErr)` - Database error
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateCustomerParams,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        let Some(customer) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::customer::ActiveModel = customer.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.username = ActiveValue::Set(params.username);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Stamps the customer's last successful login.
    pub async fn record_login(&self, id: i32) -> Result<(), DbErr> {
        let Some(customer) = self.get_by_id(id).await? else {
            return Ok(());
        };

        let mut active_model: entity::customer::ActiveModel = customer.into();
        active_model.last_login = ActiveValue::Set(Some(Utc::now()));
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Soft deletes a customer account by setting `deleted_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - The account was marked deleted
    /// - `Ok(false)` - No such account, or it was already deleted
    /// - `Err(DbErr)` - Database error
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(customer) = self.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut active_model: entity::customer::ActiveModel = customer.into();
        active_model.deleted_at = ActiveValue::Set(Some(Utc::now()));
        active_model.update(self.db).await?;

        Ok(true)
    }
}
