//! Review factory for creating customer car-rating rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review with the given rating and no comment.
pub async fn create_review(
    db: &DatabaseConnection,
    customer_id: i32,
    car_id: i32,
    rating: i32,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        customer_id: ActiveValue::Set(customer_id),
        car_id: ActiveValue::Set(car_id),
        rating: ActiveValue::Set(rating),
        comment: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
