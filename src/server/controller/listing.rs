use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        listing::{CreateListingDto, ListingDto, PaginatedListingsDto, UpdateListingDto},
        stats::DimensionStatsDto,
    },
    server::{
        controller::param::{RecommendedQuery, SearchQuery},
        error::AppError,
        middleware::auth::{CustomerGuard, VendorGuard},
        query::stats::Dimension,
        service::{file::FileService, listing::ListingService},
        state::AppState,
    },
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Search listings with filters, sorting, and pagination.
///
/// Public marketplace search. All filter parameters are optional; id lists are
/// comma-separated, name filters match case-insensitive substrings, and range
/// filters apply only when both bounds are present. Pagination is
/// both-or-neither: supplying only one of `page` and `pageSize` is rejected.
///
/// # Returns
/// - `200 OK` - Page of listings with totals
/// - `400 Bad Request` - Malformed ids, inverted range, unknown sort field,
///   or half-specified pagination
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = LISTING_TAG,
    params(
        ("brandIds" = Option<String>, Query, description = "Comma-separated brand ids"),
        ("categoryIds" = Option<String>, Query, description = "Comma-separated category ids"),
        ("priceMin" = Option<f64>, Query, description = "Lower price bound, only applied together with priceMax"),
        ("priceMax" = Option<f64>, Query, description = "Upper price bound, only applied together with priceMin"),
        ("mileageMin" = Option<i32>, Query, description = "Lower mileage bound, only applied together with mileageMax"),
        ("mileageMax" = Option<i32>, Query, description = "Upper mileage bound, only applied together with mileageMin"),
        ("modelName" = Option<String>, Query, description = "Case-insensitive model name substring"),
        ("vendorName" = Option<String>, Query, description = "Case-insensitive vendor name substring"),
        ("vendorId" = Option<i32>, Query, description = "Restrict to one vendor"),
        ("sortBy" = Option<String>, Query, description = "createdAt, price, mileage, year, viewCount, or favoriteCount"),
        ("sortOrder" = Option<String>, Query, description = "asc or desc"),
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("pageSize" = Option<u64>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Page of listings", body = PaginatedListingsDto),
        (status = 400, description = "Malformed filter, sort, or pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_listings(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.filter()?;
    let (sort_by, sort_order) = query.sort()?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    let listings = service
        .search(&filter, sort_by, sort_order, query.page, query.page_size)
        .await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Get the most viewed listings for the landing page.
///
/// # Returns
/// - `200 OK` - Up to `amount` listings ordered by view count, ten by default
/// - `400 Bad Request` - `amount` was zero
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings/recommended",
    tag = LISTING_TAG,
    params(
        ("amount" = Option<u64>, Query, description = "How many listings to return, default 10")
    ),
    responses(
        (status = 200, description = "Most viewed listings", body = Vec<ListingDto>),
        (status = 400, description = "Zero amount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommended_listings(
    State(state): State<AppState>,
    Query(query): Query<RecommendedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ListingService::new(&state.db, &state.media_base_url);
    let listings = service.get_recommended(query.amount).await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Get histogram statistics over the filtered listing set.
///
/// Computes one histogram per price or mileage class, each class covering a
/// sub-range of the dimension with its own bar width. The same filter
/// parameters as the search endpoint restrict the aggregated set.
///
/// # Returns
/// - `200 OK` - Histograms for every class of the dimension
/// - `400 Bad Request` - Unknown dimension or malformed filter
/// - `500 Internal Server Error` - No listings match the filter, or database error
#[utoipa::path(
    get,
    path = "/api/listings/stats/{dimension}",
    tag = LISTING_TAG,
    params(
        ("dimension" = String, Path, description = "price or mileage")
    ),
    responses(
        (status = 200, description = "Histograms for the dimension", body = DimensionStatsDto),
        (status = 400, description = "Unknown dimension or malformed filter", body = ErrorDto),
        (status = 500, description = "Empty result set or internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing_stats(
    State(state): State<AppState>,
    Path(dimension): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let dimension: Dimension = dimension.parse()?;
    let filter = query.filter()?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    let stats = service.get_stats(dimension, &filter).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get one listing by id.
///
/// Records a view for the listing. The viewing customer is attributed when
/// logged in; guests are recorded anonymously.
///
/// # Returns
/// - `200 OK` - The listing
/// - `404 Not Found` - No such listing, or it was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing id")
    ),
    responses(
        (status = 200, description = "The listing", body = ListingDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = CustomerGuard::new(&state.db, &session)
        .optional()
        .await?
        .map(|customer| customer.id);

    let service = ListingService::new(&state.db, &state.media_base_url);
    let listing = service.get_by_id(id, viewer).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Create a listing for the logged-in vendor user's dealership.
///
/// # Access Control
/// - Vendor user session required
///
/// # Returns
/// - `201 Created` - The created listing
/// - `401 Unauthorized` - Not logged in as a vendor user
/// - `404 Not Found` - The referenced car does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/listings",
    tag = LISTING_TAG,
    request_body = CreateListingDto,
    responses(
        (status = 201, description = "Created listing", body = ListingDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    let listing = service.create(dto, user.vendor_id).await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// Update a listing owned by the logged-in vendor user's dealership.
///
/// # Access Control
/// - Vendor user session required; the listing must belong to the user's vendor
///
/// # Returns
/// - `200 OK` - The updated listing
/// - `401 Unauthorized` - Not logged in as a vendor user
/// - `403 Forbidden` - The listing belongs to another vendor
/// - `404 Not Found` - No such listing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing id")
    ),
    request_body = UpdateListingDto,
    responses(
        (status = 200, description = "Updated listing", body = ListingDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 403, description = "Listing belongs to another vendor", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    let listing = service.update(id, user.vendor_id, dto).await?;

    Ok((StatusCode::OK, Json(listing)))
}

/// Soft delete a listing owned by the logged-in vendor user's dealership.
///
/// The row is retained with a deletion timestamp and disappears from all
/// public queries.
///
/// # Returns
/// - `204 No Content` - Listing deleted
/// - `401 Unauthorized` - Not logged in as a vendor user
/// - `403 Forbidden` - The listing belongs to another vendor
/// - `404 Not Found` - No such listing
#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing id")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 403, description = "Listing belongs to another vendor", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    service.delete(id, user.vendor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a picture for a listing.
///
/// Accepts a multipart form with a single `file` field. The stored file is
/// attached to the listing and its public URL returned.
///
/// # Returns
/// - `201 Created` - Public URL of the stored picture
/// - `400 Bad Request` - Missing or malformed file field
/// - `401 Unauthorized` - Not logged in as a vendor user
/// - `403 Forbidden` - The listing belongs to another vendor
/// - `404 Not Found` - No such listing
#[utoipa::path(
    post,
    path = "/api/listings/{id}/pictures",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing id")
    ),
    responses(
        (status = 201, description = "Public URL of the stored picture", body = String),
        (status = 400, description = "Missing or malformed file field", body = ErrorDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 403, description = "Listing belongs to another vendor", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_listing_picture(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    let (original_name, bytes) = read_upload(multipart).await?;

    let file_service = FileService::new(std::path::Path::new(&state.media_dir));
    let (path, name) = file_service.save("listings", &original_name, &bytes).await?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    let url = service.add_picture(id, user.vendor_id, path, name).await?;

    Ok((StatusCode::CREATED, Json(url)))
}

/// Pulls the single `file` field out of a multipart upload.
pub(super) async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "upload".to_string());
        let bytes = field.bytes().await?;

        return Ok((original_name, bytes.to_vec()));
    }

    Err(AppError::BadRequest(
        "Multipart body is missing a 'file' field".to_string(),
    ))
}
