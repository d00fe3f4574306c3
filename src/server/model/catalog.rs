//! Catalog domain models: brands, categories, models, and cars.
//!
//! Reference data owned by the marketplace operator rather than by vendors.
//! Cars carry a base specification document that listings may override.

use sea_orm::FromQueryResult;
use serde_json::Value;

use crate::model::catalog::{
    BrandDto, CarDto, CarModelDto, CategoryDto, PaginatedBrandsDto, PaginatedCarsDto,
};

/// Vehicle make.
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: i32,
    pub name: String,
}

impl Brand {
    pub fn from_entity(entity: entity::brand::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Body-style category (sedan, SUV, and so on).
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Model line within a brand.
#[derive(Debug, Clone, PartialEq)]
pub struct CarModel {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
}

impl CarModel {
    pub fn from_entity(entity: entity::car_model::Model) -> Self {
        Self {
            id: entity.id,
            brand_id: entity.brand_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CarModelDto {
        CarModelDto {
            id: self.id,
            brand_id: self.brand_id,
            name: self.name,
        }
    }
}

/// Denormalized catalog row: one car joined with its brand, category, and model.
///
/// Column aliases in the catalog search select match these field names.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CarRow {
    pub id: i32,
    pub brand_id: i32,
    pub brand_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub model_id: i32,
    pub model_name: String,
    pub year: i32,
    pub base_price: f64,
    pub specifications: Value,
}

impl CarRow {
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.id,
            brand_id: self.brand_id,
            brand_name: self.brand_name,
            category_id: self.category_id,
            category_name: self.category_name,
            model_id: self.model_id,
            model_name: self.model_name,
            year: self.year,
            base_price: format!("{:.2}", self.base_price),
            specifications: self.specifications,
        }
    }
}

/// Parameters for creating a catalog car entry.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub brand_id: i32,
    pub category_id: i32,
    pub model_id: i32,
    pub year: i32,
    pub base_price: f64,
    pub specifications: Value,
}

/// Page of catalog rows with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CarPage {
    pub rows: Vec<CarRow>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl CarPage {
    pub fn into_dto(self) -> PaginatedCarsDto {
        let total_pages = if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        };

        PaginatedCarsDto {
            cars: self.rows.into_iter().map(CarRow::into_dto).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages,
        }
    }
}

/// Page of brands with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandPage {
    pub brands: Vec<Brand>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl BrandPage {
    pub fn into_dto(self) -> PaginatedBrandsDto {
        let total_pages = if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        };

        PaginatedBrandsDto {
            brands: self.brands.into_iter().map(Brand::into_dto).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages,
        }
    }
}
