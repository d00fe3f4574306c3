use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a listing as a customer's favorite.
    ///
    /// Idempotent: adding an existing favorite returns the existing row
    /// rather than violating the unique pair index.
    ///
    /// # Returns
    /// - `Ok((favorite, created))` - The favorite row and whether it was
    ///   newly created
    /// - `Err(DbErr)` - Database error
    pub async fn add(
        &self,
        customer_id: i32,
        listing_id: i32,
    ) -> Result<(entity::favorite::Model, bool), DbErr> {
        if let Some(existing) = self.find(customer_id, listing_id).await? {
            return Ok((existing, false));
        }

        let favorite = entity::favorite::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            listing_id: ActiveValue::Set(listing_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((favorite, true))
    }

    /// Removes a customer's favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite existed and was removed
    /// - `Ok(false)` - No such favorite
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, customer_id: i32, listing_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::CustomerId.eq(customer_id))
            .filter(entity::favorite::Column::ListingId.eq(listing_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find(
        &self,
        customer_id: i32,
        listing_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::CustomerId.eq(customer_id))
            .filter(entity::favorite::Column::ListingId.eq(listing_id))
            .one(self.db)
            .await
    }

    /// Lists a customer's favorites, most recent first.
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
