use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateListingDto {
    pub car_id: i32,
    pub price: f64,
    pub pre_discount_price: Option<f64>,
    #[serde(default)]
    pub is_discount: bool,
    pub mileage: i32,
    pub year: i32,
    pub override_specification: Option<Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateListingDto {
    pub price: f64,
    pub pre_discount_price: Option<f64>,
    pub is_discount: bool,
    pub mileage: i32,
    pub year: i32,
    pub override_specification: Option<Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ListingDto {
    pub id: i32,
    /// Price rendered with two decimal places.
    pub price: String,
    pub pre_discount_price: Option<String>,
    pub is_discount: bool,
    pub mileage: i32,
    pub year: i32,
    pub view_count: i32,
    pub favorite_count: i32,
    pub brand_name: String,
    pub category_name: String,
    pub model_name: String,
    pub vendor_id: i32,
    pub vendor_name: String,
    pub vendor_address: String,
    pub vendor_picture: Option<String>,
    pub pictures: Vec<String>,
    /// Base car specification with the listing's overrides applied field by field.
    pub specification: Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedListingsDto {
    pub listings: Vec<ListingDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}
