//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 clients for Google and Facebook authentication
//! - Application URL for generating links
//! - Media storage locations for uploaded files

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// Type alias for the OAuth2 clients configured for Google and Facebook authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for fetching OAuth provider profiles.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google login flow.
    pub google_oauth_client: OAuth2Client,

    /// OAuth2 client for the Facebook login flow.
    pub facebook_oauth_client: OAuth2Client,

    /// Application base URL for generating links.
    ///
    /// Used to construct full URLs for OAuth2 callbacks and other resources
    /// that need to reference the application.
    pub app_url: String,

    /// Directory where uploaded media files are written.
    pub media_dir: String,

    /// Public base URL under which uploaded media is served.
    ///
    /// Prepended to stored picture paths when building the URLs returned in
    /// listing and vendor responses.
    pub media_base_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        google_oauth_client: OAuth2Client,
        facebook_oauth_client: OAuth2Client,
        app_url: String,
        media_dir: String,
        media_base_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            google_oauth_client,
            facebook_oauth_client,
            app_url,
            media_dir,
            media_base_url,
        }
    }
}
