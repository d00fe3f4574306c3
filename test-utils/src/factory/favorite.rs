//! Favorite factory for creating customer/listing join rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite row linking a customer to a listing.
pub async fn create_favorite(
    db: &DatabaseConnection,
    customer_id: i32,
    listing_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        customer_id: ActiveValue::Set(customer_id),
        listing_id: ActiveValue::Set(listing_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
