use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewAverageDto, ReviewDto},
    },
    server::{
        error::AppError, middleware::auth::CustomerGuard, service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Post a review of a catalog car.
///
/// The reviewing customer comes from the session; ratings run from 1 to 5.
///
/// # Returns
/// - `201 Created` - The stored review
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `401 Unauthorized` - Not logged in as a customer
/// - `404 Not Found` - The reviewed car does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Stored review", body = ReviewDto),
        (status = 400, description = "Rating outside 1 to 5", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerGuard::new(&state.db, &session).require().await?;

    let service = ReviewService::new(&state.db);
    let review = service.create(customer.id, dto).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// List a customer's reviews, newest first.
#[utoipa::path(
    get,
    path = "/api/reviews/{customer_id}",
    tag = REVIEW_TAG,
    params(
        ("customer_id" = i32, Path, description = "Customer id")
    ),
    responses(
        (status = 200, description = "The customer's reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_reviews(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);
    let reviews = service.get_by_customer(customer_id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Get a customer's mean rating.
///
/// A customer without reviews averages to zero.
#[utoipa::path(
    get,
    path = "/api/reviews/{customer_id}/average",
    tag = REVIEW_TAG,
    params(
        ("customer_id" = i32, Path, description = "Customer id")
    ),
    responses(
        (status = 200, description = "Mean rating and review count", body = ReviewAverageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_average_rating(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReviewService::new(&state.db);
    let average = service.get_average_rating(customer_id).await?;

    Ok((StatusCode::OK, Json(average)))
}
