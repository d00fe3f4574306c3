//! Catalog service for brands, categories, model lines, and cars.

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{BrandDto, CarDto, CarModelDto, CategoryDto, PaginatedBrandsDto, PaginatedCarsDto},
    server::{
        data::{brand::BrandRepository, car::CarRepository, category::CategoryRepository},
        error::AppError,
        model::catalog::{Brand, BrandPage, CarModel, CarPage, CarRow, Category, CreateCarParams},
        query::{
            filter::{ListingFilter, SortField, SortOrder},
            page::PageSlice,
        },
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists brands with both-or-neither pagination semantics.
    pub async fn get_brands(
        &self,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<PaginatedBrandsDto, AppError> {
        let slice = PageSlice::new(page, page_size)?;

        let repo = BrandRepository::new(self.db);
        let (brands, total) = repo.get_paginated(slice).await?;

        let page = BrandPage {
            brands: brands.into_iter().map(Brand::from_entity).collect(),
            total,
            page: page.unwrap_or(1),
            page_size: page_size.unwrap_or(total),
        };

        Ok(page.into_dto())
    }

    pub async fn create_brand(&self, name: String) -> Result<BrandDto, AppError> {
        let repo = BrandRepository::new(self.db);

        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Brand '{}' already exists",
                name
            )));
        }

        let brand = repo.create(name).await?;

        Ok(Brand::from_entity(brand).into_dto())
    }

    pub async fn get_categories(&self) -> Result<Vec<CategoryDto>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let categories = repo
            .get_all()
            .await?
            .into_iter()
            .map(|category| Category::from_entity(category).into_dto())
            .collect();

        Ok(categories)
    }

    pub async fn create_category(&self, name: String) -> Result<CategoryDto, AppError> {
        let repo = CategoryRepository::new(self.db);
        let category = repo.create(name).await?;

        Ok(Category::from_entity(category).into_dto())
    }

    /// Lists the model lines of one brand.
    pub async fn get_models_by_brand(&self, brand_id: i32) -> Result<Vec<CarModelDto>, AppError> {
        let brand_repo = BrandRepository::new(self.db);

        brand_repo
            .get_by_id(brand_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand not found".to_string()))?;

        let models = CarRepository::new(self.db)
            .get_models_by_brand(brand_id)
            .await?
            .into_iter()
            .map(|model| CarModel::from_entity(model).into_dto())
            .collect();

        Ok(models)
    }

    pub async fn create_model(&self, brand_id: i32, name: String) -> Result<CarModelDto, AppError> {
        let brand_repo = BrandRepository::new(self.db);

        brand_repo
            .get_by_id(brand_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand not found".to_string()))?;

        let model = CarRepository::new(self.db).create_model(brand_id, name).await?;

        Ok(CarModel::from_entity(model).into_dto())
    }

    /// Searches the catalog with the shared filter compiler under the catalog
    /// column mapping.
    pub async fn search_cars(
        &self,
        filter: &ListingFilter,
        sort_by: SortField,
        sort_order: SortOrder,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<PaginatedCarsDto, AppError> {
        let slice = PageSlice::new(page, page_size)?;

        let repo = CarRepository::new(self.db);
        let (rows, total) = repo.search(filter, sort_by, sort_order, slice).await?;

        let page = CarPage {
            rows,
            total,
            page: page.unwrap_or(1),
            page_size: page_size.unwrap_or(total),
        };

        Ok(page.into_dto())
    }

    pub async fn get_car(&self, id: i32) -> Result<CarDto, AppError> {
        let repo = CarRepository::new(self.db);

        let row = repo
            .get_row_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Ok(row.into_dto())
    }

    pub async fn create_car(&self, params: CreateCarParams) -> Result<CarDto, AppError> {
        let repo = CarRepository::new(self.db);

        let car = repo.create(params).await?;

        let row = repo
            .get_row_by_id(car.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found after creation".to_string()))?;

        Ok(CarRow::into_dto(row))
    }
}
