use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        vendor::{CreateVendorDto, RegisterVendorUserDto, VendorDto, VendorUserDto},
    },
    server::{
        controller::listing::read_upload,
        error::{auth::AuthError, AppError},
        middleware::auth::VendorGuard,
        model::vendor::VendorUser,
        service::{file::FileService, vendor::VendorService},
        state::AppState,
    },
};

/// Tag for grouping vendor endpoints in OpenAPI documentation
pub static VENDOR_TAG: &str = "vendor";

/// Register a dealership.
#[utoipa::path(
    post,
    path = "/api/vendors",
    tag = VENDOR_TAG,
    request_body = CreateVendorDto,
    responses(
        (status = 201, description = "Created dealership", body = VendorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(dto): Json<CreateVendorDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VendorService::new(&state.db, &state.media_base_url);
    let vendor = service.create(dto).await?;

    Ok((StatusCode::CREATED, Json(vendor)))
}

/// Get a dealership's public profile.
#[utoipa::path(
    get,
    path = "/api/vendors/{id}",
    tag = VENDOR_TAG,
    params(
        ("id" = i32, Path, description = "Vendor id")
    ),
    responses(
        (status = 200, description = "The dealership", body = VendorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = VendorService::new(&state.db, &state.media_base_url);
    let vendor = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Upload a dealership logo.
///
/// Accepts a multipart form with a single `file` field.
///
/// # Access Control
/// - Vendor user session required; the user must belong to this dealership
#[utoipa::path(
    post,
    path = "/api/vendors/{id}/logo",
    tag = VENDOR_TAG,
    params(
        ("id" = i32, Path, description = "Vendor id")
    ),
    responses(
        (status = 200, description = "Dealership with the new logo URL", body = VendorDto),
        (status = 400, description = "Missing or malformed file field", body = ErrorDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 403, description = "User belongs to another dealership", body = ErrorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_vendor_logo(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    if user.vendor_id != id {
        return Err(AuthError::AccessDenied(user.id, format!("vendor {}", id)).into());
    }

    let (original_name, bytes) = read_upload(multipart).await?;

    let file_service = FileService::new(std::path::Path::new(&state.media_dir));
    let (path, name) = file_service.save("vendors", &original_name, &bytes).await?;

    let service = VendorService::new(&state.db, &state.media_base_url);
    let vendor = service.set_logo(id, path, name).await?;

    Ok((StatusCode::OK, Json(vendor)))
}

/// Register a staff account under an existing dealership.
#[utoipa::path(
    post,
    path = "/api/vendors/users",
    tag = VENDOR_TAG,
    request_body = RegisterVendorUserDto,
    responses(
        (status = 201, description = "Created staff account", body = VendorUserDto),
        (status = 400, description = "Username already taken", body = ErrorDto),
        (status = 404, description = "Vendor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_vendor_user(
    State(state): State<AppState>,
    Json(dto): Json<RegisterVendorUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = VendorService::new(&state.db, &state.media_base_url);
    let user = service.register_user(dto).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the logged-in staff account.
#[utoipa::path(
    get,
    path = "/api/vendors/users/me",
    tag = VENDOR_TAG,
    responses(
        (status = 200, description = "The staff account", body = VendorUserDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vendor_user_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    let dto = VendorUser::from_entity(user).into_dto(&state.media_base_url);

    Ok((StatusCode::OK, Json(dto)))
}

/// Upload a profile picture for the logged-in staff account.
///
/// Accepts a multipart form with a single `file` field.
#[utoipa::path(
    post,
    path = "/api/vendors/users/me/picture",
    tag = VENDOR_TAG,
    responses(
        (status = 200, description = "Staff account with the new picture URL", body = VendorUserDto),
        (status = 400, description = "Missing or malformed file field", body = ErrorDto),
        (status = 401, description = "Not logged in as a vendor user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_vendor_user_picture(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = VendorGuard::new(&state.db, &session).require().await?;

    let (original_name, bytes) = read_upload(multipart).await?;

    let file_service = FileService::new(std::path::Path::new(&state.media_dir));
    let (path, name) = file_service
        .save("vendor_users", &original_name, &bytes)
        .await?;

    let service = VendorService::new(&state.db, &state.media_base_url);
    let updated = service.set_user_picture(user.id, path, name).await?;

    Ok((StatusCode::OK, Json(updated)))
}
