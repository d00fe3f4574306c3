use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateVendorDto {
    pub name: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VendorDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub logo_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterVendorUserDto {
    pub vendor_id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VendorUserDto {
    pub id: i32,
    pub vendor_id: i32,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub picture_url: Option<String>,
}
