use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        subscription::{CreateSubscriptionPackageDto, SubscriptionPackageDto},
    },
    server::{
        error::AppError, middleware::auth::VendorGuard,
        service::subscription::SubscriptionService, state::AppState,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscription";

/// Create a subscription package.
///
/// # Access Control
/// - Vendor user session required
///
/// # Returns
/// - `201 Created` - The created package
/// - `400 Bad Request` - A negative slot count, price, or duration
/// - `401 Unauthorized` - Not logged in as a vendor user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/subscriptions",
    tag = SUBSCRIPTION_TAG,
    request_body = CreateSubscriptionPackageDto,
    responses(
        (status = 201, description = "Created package", body = SubscriptionPackageDto),
        (status = 400, description = "Negative slot count, price, or duration", body = ErrorDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subscription_package(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateSubscriptionPackageDto>,
) -> Result<impl IntoResponse, AppError> {
    VendorGuard::new(&state.db, &session).require().await?;

    let service = SubscriptionService::new(&state.db);
    let package = service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(package)))
}

/// List the offered subscription packages, cheapest first.
#[utoipa::path(
    get,
    path = "/api/subscriptions",
    tag = SUBSCRIPTION_TAG,
    responses(
        (status = 200, description = "Offered packages", body = Vec<SubscriptionPackageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription_packages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubscriptionService::new(&state.db);
    let packages = service.get_all().await?;

    Ok((StatusCode::OK, Json(packages)))
}
