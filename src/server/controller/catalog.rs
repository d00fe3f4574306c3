use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{
            BrandDto, CarDto, CarModelDto, CategoryDto, CreateCarDto, CreateNamedDto,
            PaginatedBrandsDto, PaginatedCarsDto,
        },
    },
    server::{
        controller::param::{PaginationQuery, SearchQuery},
        error::AppError,
        middleware::auth::VendorGuard,
        model::catalog::CreateCarParams,
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// List brands, optionally paginated.
///
/// Pagination is both-or-neither: supplying only one of `page` and `pageSize`
/// is rejected.
///
/// # Returns
/// - `200 OK` - Page of brands with totals
/// - `400 Bad Request` - Half-specified pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = CATALOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("pageSize" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Page of brands", body = PaginatedBrandsDto),
        (status = 400, description = "Half-specified pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brands(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);
    let brands = service.get_brands(query.page, query.page_size).await?;

    Ok((StatusCode::OK, Json(brands)))
}

/// Create a brand.
///
/// # Access Control
/// - Vendor user session required
///
/// # Returns
/// - `201 Created` - The created brand
/// - `400 Bad Request` - A brand with this name already exists
/// - `401 Unauthorized` - Not logged in as a vendor user
#[utoipa::path(
    post,
    path = "/api/brands",
    tag = CATALOG_TAG,
    request_body = CreateNamedDto,
    responses(
        (status = 201, description = "Created brand", body = BrandDto),
        (status = 400, description = "Brand name already exists", body = ErrorDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, AppError> {
    VendorGuard::new(&state.db, &session).require().await?;

    let service = CatalogService::new(&state.db);
    let brand = service.create_brand(dto.name).await?;

    Ok((StatusCode::CREATED, Json(brand)))
}

/// List all categories.
///
/// The category set is small and fixed, so this endpoint is not paginated.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);
    let categories = service.get_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

/// Create a category.
///
/// # Access Control
/// - Vendor user session required
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATALOG_TAG,
    request_body = CreateNamedDto,
    responses(
        (status = 201, description = "Created category", body = CategoryDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, AppError> {
    VendorGuard::new(&state.db, &session).require().await?;

    let service = CatalogService::new(&state.db);
    let category = service.create_category(dto.name).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// List the models of one brand.
///
/// # Returns
/// - `200 OK` - Models of the brand
/// - `404 Not Found` - No such brand
#[utoipa::path(
    get,
    path = "/api/brands/{brand_id}/models",
    tag = CATALOG_TAG,
    params(
        ("brand_id" = i32, Path, description = "Brand id")
    ),
    responses(
        (status = 200, description = "Models of the brand", body = Vec<CarModelDto>),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brand_models(
    State(state): State<AppState>,
    Path(brand_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);
    let models = service.get_models_by_brand(brand_id).await?;

    Ok((StatusCode::OK, Json(models)))
}

/// Create a model under a brand.
///
/// # Access Control
/// - Vendor user session required
#[utoipa::path(
    post,
    path = "/api/brands/{brand_id}/models",
    tag = CATALOG_TAG,
    params(
        ("brand_id" = i32, Path, description = "Brand id")
    ),
    request_body = CreateNamedDto,
    responses(
        (status = 201, description = "Created model", body = CarModelDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand_model(
    State(state): State<AppState>,
    session: Session,
    Path(brand_id): Path<i32>,
    Json(dto): Json<CreateNamedDto>,
) -> Result<impl IntoResponse, AppError> {
    VendorGuard::new(&state.db, &session).require().await?;

    let service = CatalogService::new(&state.db);
    let model = service.create_model(brand_id, dto.name).await?;

    Ok((StatusCode::CREATED, Json(model)))
}

/// Search catalog cars with filters, sorting, and pagination.
///
/// Accepts the same filter parameters as the listing search; filters and sort
/// fields that only exist on listings (mileage, vendor, view and favorite
/// counts) are ignored or rejected respectively.
///
/// # Returns
/// - `200 OK` - Page of cars with totals
/// - `400 Bad Request` - Malformed parameters, or a sort field the catalog
///   does not carry
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CATALOG_TAG,
    params(
        ("brandIds" = Option<String>, Query, description = "Comma-separated brand ids"),
        ("categoryIds" = Option<String>, Query, description = "Comma-separated category ids"),
        ("priceMin" = Option<f64>, Query, description = "Lower base price bound, only applied together with priceMax"),
        ("priceMax" = Option<f64>, Query, description = "Upper base price bound, only applied together with priceMin"),
        ("modelName" = Option<String>, Query, description = "Case-insensitive model name substring"),
        ("sortBy" = Option<String>, Query, description = "createdAt, price, or year"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc"),
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("pageSize" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Page of cars", body = PaginatedCarsDto),
        (status = 400, description = "Malformed filter, sort, or pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_cars(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.filter()?;
    let (sort_by, sort_order) = query.sort()?;

    let service = CatalogService::new(&state.db);
    let cars = service
        .search_cars(&filter, sort_by, sort_order, query.page, query.page_size)
        .await?;

    Ok((StatusCode::OK, Json(cars)))
}

/// Get one catalog car by id.
#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Car id")
    ),
    responses(
        (status = 200, description = "The car", body = CarDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db);
    let car = service.get_car(id).await?;

    Ok((StatusCode::OK, Json(car)))
}

/// Create a catalog car.
///
/// # Access Control
/// - Vendor user session required
#[utoipa::path(
    post,
    path = "/api/cars",
    tag = CATALOG_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Created car", body = CarDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 404, description = "Brand, category, or model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    VendorGuard::new(&state.db, &session).require().await?;

    let service = CatalogService::new(&state.db);
    let car = service
        .create_car(CreateCarParams {
            brand_id: dto.brand_id,
            category_id: dto.category_id,
            model_id: dto.model_id,
            year: dto.year,
            base_price: dto.base_price,
            specifications: dto.specifications,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(car)))
}
