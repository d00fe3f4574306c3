use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReviewDto {
    pub car_id: i32,
    /// Rating from 1 to 5.
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub customer_id: i32,
    pub car_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewAverageDto {
    /// Mean rating across the customer's reviews; 0 when there are none.
    pub average: f64,
    pub review_count: u64,
}
