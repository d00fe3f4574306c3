use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSubscriptionPackageDto {
    pub package_name: String,
    /// Number of concurrent listings the plan allows.
    pub car_post_slot: i32,
    pub price: f64,
    pub duration_in_day: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubscriptionPackageDto {
    pub id: i32,
    pub package_name: String,
    pub car_post_slot: i32,
    /// Price rendered with two decimal places.
    pub price: String,
    pub duration_in_day: i32,
}
