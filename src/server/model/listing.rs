//! Listing domain models and parameters.
//!
//! Provides domain models for vehicle listings in both their entity shape and the
//! denormalized row shape produced by the marketplace search join. Includes parameter
//! types for the vendor-facing create/update operations and the specification merge
//! applied when a listing overrides parts of its car's base document.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde_json::Value;

use crate::model::listing::{CreateListingDto, ListingDto, PaginatedListingsDto, UpdateListingDto};

/// Vehicle listing as stored, without related data.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Unique identifier for the listing.
    pub id: i32,
    /// ID of the catalog car this listing offers.
    pub car_id: i32,
    /// ID of the vendor that posted the listing.
    pub vendor_id: i32,
    /// Asking price.
    pub price: f64,
    /// Price before the current discount, if the listing is discounted.
    pub pre_discount_price: Option<f64>,
    /// Whether the listing is currently discounted.
    pub is_discount: bool,
    /// Odometer reading in kilometers.
    pub mileage: i32,
    /// Model year of the offered vehicle.
    pub year: i32,
    /// Listing-specific overrides applied on top of the car's base specification.
    pub override_specification: Option<Value>,
    /// Number of times the listing detail has been viewed.
    pub view_count: i32,
    /// Number of customers that favorited the listing.
    pub favorite_count: i32,
    /// Timestamp when the listing was created.
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Converts an entity model to a listing domain model at the repository boundary.
    pub fn from_entity(entity: entity::listing::Model) -> Self {
        Self {
            id: entity.id,
            car_id: entity.car_id,
            vendor_id: entity.vendor_id,
            price: entity.price,
            pre_discount_price: entity.pre_discount_price,
            is_discount: entity.is_discount,
            mileage: entity.mileage,
            year: entity.year,
            override_specification: entity.override_specification,
            view_count: entity.view_count,
            favorite_count: entity.favorite_count,
            created_at: entity.created_at,
        }
    }
}

/// Denormalized search row: one listing joined with its car, brand, category,
/// model, and vendor.
///
/// Column aliases in the search select match these field names. Pictures and
/// the vendor's profile picture are attached by the service from separate
/// lookups since they are one-to-many.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ListingRow {
    pub id: i32,
    pub price: f64,
    pub pre_discount_price: Option<f64>,
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
    pub base_specification: Value,
    pub override_specification: Option<Value>,
}

impl ListingRow {
    /// Reshapes the raw row into the flat API view model.
    ///
    /// Prices are rendered with two decimal places and the specification is
    /// the base document with the listing's overrides applied field by field.
    ///
    /// # Arguments
    /// - `pictures` - Full URLs of the listing's pictures
    /// - `vendor_picture` - Full URL of the vendor's profile picture, resolved
    ///   from the vendor's first user account, if any
    pub fn into_dto(self, pictures: Vec<String>, vendor_picture: Option<String>) -> ListingDto {
        let specification =
            merge_specification(&self.base_specification, self.override_specification.as_ref());

        ListingDto {
            id: self.id,
            price: format!("{:.2}", self.price),
            pre_discount_price: self.pre_discount_price.map(|p| format!("{:.2}", p)),
            is_discount: self.is_discount,
            mileage: self.mileage,
            year: self.year,
            view_count: self.view_count,
            favorite_count: self.favorite_count,
            brand_name: self.brand_name,
            category_name: self.category_name,
            model_name: self.model_name,
            vendor_id: self.vendor_id,
            vendor_name: self.vendor_name,
            vendor_address: self.vendor_address,
            vendor_picture,
            pictures,
            specification,
        }
    }
}

/// Applies a listing's override document on top of its car's base specification.
///
/// The result carries every field of the base document, with any same-named
/// field from the override replacing the base value. Non-object documents are
/// returned as the base unchanged.
pub fn merge_specification(base: &Value, override_spec: Option<&Value>) -> Value {
    match (base, override_spec) {
        (Value::Object(base_map), Some(Value::Object(over))) => {
            let mut merged = base_map.clone();
            for (key, value) in over {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        _ => base.clone(),
    }
}

/// Page of search rows with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    /// Rows for this page.
    pub rows: Vec<ListingRow>,
    /// Total number of matching listings across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of listings per page.
    pub page_size: u64,
}

impl ListingPage {
    /// Converts the page to a DTO once the service has resolved pictures and
    /// vendor profile pictures per row.
    pub fn into_dto(self, listings: Vec<ListingDto>) -> PaginatedListingsDto {
        let total_pages = if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        };

        PaginatedListingsDto {
            listings,
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages,
        }
    }
}

/// Parameters for creating a listing under a vendor's inventory.
#[derive(Debug, Clone)]
pub struct CreateListingParams {
    /// ID of the catalog car being offered.
    pub car_id: i32,
    /// ID of the vendor posting the listing.
    pub vendor_id: i32,
    /// Asking price.
    pub price: f64,
    /// Price before discount, when posting an already-discounted listing.
    pub pre_discount_price: Option<f64>,
    /// Whether the listing starts out discounted.
    pub is_discount: bool,
    /// Odometer reading in kilometers.
    pub mileage: i32,
    /// Model year of the offered vehicle.
    pub year: i32,
    /// Listing-specific specification overrides.
    pub override_specification: Option<Value>,
}

impl CreateListingParams {
    /// Converts a DTO to creation parameters, binding the authenticated
    /// vendor's id.
    pub fn from_dto(dto: CreateListingDto, vendor_id: i32) -> Self {
        Self {
            car_id: dto.car_id,
            vendor_id,
            price: dto.price,
            pre_discount_price: dto.pre_discount_price,
            is_discount: dto.is_discount,
            mileage: dto.mileage,
            year: dto.year,
            override_specification: dto.override_specification,
        }
    }
}

/// Parameters for updating a listing in place.
#[derive(Debug, Clone)]
pub struct UpdateListingParams {
    /// New asking price.
    pub price: f64,
    /// New pre-discount price, if any.
    pub pre_discount_price: Option<f64>,
    /// New discount flag.
    pub is_discount: bool,
    /// New odometer reading.
    pub mileage: i32,
    /// New model year.
    pub year: i32,
    /// New specification overrides (replaces the previous document).
    pub override_specification: Option<Value>,
}

impl UpdateListingParams {
    pub fn from_dto(dto: UpdateListingDto) -> Self {
        Self {
            price: dto.price,
            pre_discount_price: dto.pre_discount_price,
            is_discount: dto.is_discount,
            mileage: dto.mileage,
            year: dto.year,
            override_specification: dto.override_specification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_overwrites_base_fields_and_keeps_the_rest() {
        let base = json!({"engine": "1.5L", "seats": 5, "color": "white"});
        let over = json!({"color": "red", "sunroof": true});

        let merged = merge_specification(&base, Some(&over));

        assert_eq!(
            merged,
            json!({"engine": "1.5L", "seats": 5, "color": "red", "sunroof": true})
        );
    }

    #[test]
    fn merge_without_override_returns_base() {
        let base = json!({"engine": "2.0L"});
        assert_eq!(merge_specification(&base, None), base);
    }

    #[test]
    fn price_is_rendered_with_two_decimals() {
        let row = ListingRow {
            id: 1,
            price: 1_250_000.5,
            pre_discount_price: Some(1_300_000.0),
            is_discount: true,
            mileage: 42_000,
            year: 2021,
            view_count: 0,
            favorite_count: 0,
            brand_name: "Honda".to_string(),
            category_name: "Sedan".to_string(),
            model_name: "Civic".to_string(),
            vendor_id: 7,
            vendor_name: "Premium Motors".to_string(),
            vendor_address: "1 Main St".to_string(),
            base_specification: json!({}),
            override_specification: None,
        };

        let dto = row.into_dto(Vec::new(), None);

        assert_eq!(dto.price, "1250000.50");
        assert_eq!(dto.pre_discount_price.as_deref(), Some("1300000.00"));
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = ListingPage {
            rows: Vec::new(),
            total: 21,
            page: 1,
            page_size: 10,
        };

        assert_eq!(page.into_dto(Vec::new()).total_pages, 3);
    }
}
