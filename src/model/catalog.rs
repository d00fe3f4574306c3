use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateNamedDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCarDto {
    pub brand_id: i32,
    pub category_id: i32,
    pub model_id: i32,
    pub year: i32,
    pub base_price: f64,
    pub specifications: Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BrandDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CarModelDto {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub model_id: i32,
    pub model_name: String,
    pub year: i32,
    /// Base price rendered with two decimal places.
    pub base_price: String,
    pub specifications: Value,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedBrandsDto {
    pub brands: Vec<BrandDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}
