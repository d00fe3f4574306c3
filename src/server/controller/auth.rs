use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::MessageDto,
        auth::{CustomerLoginDto, VendorLoginDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{CustomerSession, OauthFlowSession, VendorSession},
        service::{
            auth::AuthService,
            oauth::{OauthProvider, OauthService},
        },
        state::{AppState, OAuth2Client},
    },
};

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the provider for token exchange.
    pub code: String,
}

/// POST /api/auth/customer/login
/// Log in a customer with email and password
pub async fn customer_login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CustomerLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);
    let customer = auth_service.customer_login(dto).await?;

    CustomerSession::new(&session)
        .set_customer_id(customer.id)
        .await?;

    Ok((StatusCode::OK, Json(customer.into_dto())))
}

/// POST /api/auth/vendor/login
/// Log in a vendor user with username and password
pub async fn vendor_login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<VendorLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);
    let user = auth_service.vendor_login(dto).await?;

    VendorSession::new(&session)
        .set_vendor_user_id(user.id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(&state.media_base_url))))
}

/// GET /api/auth/logout
/// End both login identities carried by the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    CustomerSession::new(&session).clear().await?;
    VendorSession::new(&session).clear().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// GET /api/auth/{provider}/login
/// Redirect the customer to the provider's consent screen
pub async fn oauth_login(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provider = OauthProvider::from_name(&provider)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown login provider '{}'", provider)))?;

    let oauth_service = OauthService::new(
        &state.db,
        oauth_client(&state, provider),
        &state.http_client,
        provider,
    );

    let (url, csrf_token) = oauth_service.login_url();

    // Pin the CSRF token and provider until the callback returns
    OauthFlowSession::new(&session)
        .begin(csrf_token.secret(), provider.name())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /api/auth/callback
/// Complete the OAuth flow and log the customer in
pub async fn oauth_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let flow = OauthFlowSession::new(&session);

    validate_csrf(&flow, &params.0.state).await?;

    let provider = flow
        .take_provider()
        .await?
        .and_then(|name| OauthProvider::from_name(&name))
        .ok_or(AppError::AuthErr(AuthError::CsrfValidationFailed))?;

    let oauth_service = OauthService::new(
        &state.db,
        oauth_client(&state, provider),
        &state.http_client,
        provider,
    );

    let customer = oauth_service.callback(params.0.code.clone()).await?;

    CustomerSession::new(&session)
        .set_customer_id(customer.id)
        .await?;

    Ok(Redirect::temporary(&state.app_url))
}

fn oauth_client(state: &AppState, provider: OauthProvider) -> &OAuth2Client {
    match provider {
        OauthProvider::Google => &state.google_oauth_client,
        OauthProvider::Facebook => &state.facebook_oauth_client,
    }
}

async fn validate_csrf(flow: &OauthFlowSession<'_>, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = flow.take_csrf_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
