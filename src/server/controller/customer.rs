use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        customer::{CustomerDto, RegisterCustomerDto, UpdateCustomerDto},
        listing::ListingDto,
    },
    server::{
        error::AppError,
        middleware::{auth::CustomerGuard, session::CustomerSession},
        service::{customer::CustomerService, listing::ListingService},
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Register a customer account with email and password.
///
/// # Returns
/// - `201 Created` - The created profile
/// - `400 Bad Request` - The email is already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = RegisterCustomerDto,
    responses(
        (status = 201, description = "Created profile", body = CustomerDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_customer(
    State(state): State<AppState>,
    Json(dto): Json<RegisterCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);
    let customer = service.register(dto).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get the logged-in customer's profile.
#[utoipa::path(
    get,
    path = "/api/customers/me",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "The profile", body = CustomerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = CustomerService::new(&state.db);
    let profile = service.get_profile(customer.id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update the logged-in customer's profile.
#[utoipa::path(
    put,
    path = "/api/customers/me",
    tag = CUSTOMER_TAG,
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Updated profile", body = CustomerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = CustomerService::new(&state.db);
    let profile = service.update_profile(customer.id, dto).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Soft delete the logged-in customer's account and end the session.
///
/// The row is retained with a deletion timestamp; the email can no longer be
/// used to log in.
#[utoipa::path(
    delete,
    path = "/api/customers/me",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = CustomerService::new(&state.db);
    service.delete_account(customer.id).await?;

    CustomerSession::new(&session).clear().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Account deleted".to_string(),
        }),
    ))
}

/// Get the logged-in customer's favorite listings, newest first.
#[utoipa::path(
    get,
    path = "/api/customers/me/favorites",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Favorite listings", body = Vec<ListingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = ListingService::new(&state.db, &state.media_base_url);
    let listings = service.get_favorites(customer.id).await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Mark a listing as a favorite.
///
/// Adding the same listing twice is a no-op; the favorite count only moves
/// on the first add.
#[utoipa::path(
    post,
    path = "/api/customers/me/favorites/{listing_id}",
    tag = CUSTOMER_TAG,
    params(
        ("listing_id" = i32, Path, description = "Listing id")
    ),
    responses(
        (status = 201, description = "Listing favorited", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = CustomerService::new(&state.db);
    service.add_favorite(customer.id, listing_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Listing favorited".to_string(),
        }),
    ))
}

/// Remove a listing from the favorites.
///
/// Removing a listing that is not favorited is a no-op.
#[utoipa::path(
    delete,
    path = "/api/customers/me/favorites/{listing_id}",
    tag = CUSTOMER_TAG,
    params(
        ("listing_id" = i32, Path, description = "Listing id")
    ),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    session: Session,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = CustomerService::new(&state.db);
    service.remove_favorite(customer.id, listing_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
