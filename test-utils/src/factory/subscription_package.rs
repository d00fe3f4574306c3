//! Subscription package factory for creating vendor posting plans.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subscription package with the given name and price.
pub async fn create_subscription_package(
    db: &DatabaseConnection,
    package_name: &str,
    price: f64,
) -> Result<entity::subscription_package::Model, DbErr> {
    entity::subscription_package::ActiveModel {
        package_name: ActiveValue::Set(package_name.to_string()),
        car_post_slot: ActiveValue::Set(10),
        price: ActiveValue::Set(price),
        duration_in_day: ActiveValue::Set(30),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
