use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated account in the session.
    ///
    /// The request requires a logged-in customer or vendor user but the session
    /// carries no account id. Results in a 401 Unauthorized response.
    #[error("No authenticated account in session")]
    NotLoggedIn,

    /// The session references an account that no longer exists.
    ///
    /// Usually means the account was deleted while the session was still live.
    /// Results in a 401 Unauthorized response.
    #[error("Account {0} from session not found in database")]
    AccountNotInDatabase(i32),

    /// Login attempt with an unknown identifier or a wrong password.
    ///
    /// The two cases are deliberately not distinguished in the response.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials for '{0}'")]
    InvalidCredentials(String),

    /// Authenticated account lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Account {0} denied: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback
    /// request. Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code exchange with the OAuth provider failed.
    ///
    /// Results in a 400 Bad Request response with a generic message.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// Password hashing or verification failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// messages. Error details are logged server-side while client messages stay
/// generic to avoid leaking which part of a credential was wrong.
///
/// # Returns
/// - 401 Unauthorized - Missing session, stale session, or bad credentials
/// - 403 Forbidden - Permission failures
/// - 400 Bad Request - CSRF or OAuth exchange failures
/// - 500 Internal Server Error - Password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn | Self::AccountNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(id, reason) => {
                tracing::debug!("Access denied for account {}: {}", id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(msg) => {
                tracing::error!("Password hashing failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
