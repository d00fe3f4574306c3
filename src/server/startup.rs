use oauth2::basic::BasicClient;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up session storage backed by the application database.
///
/// Creates the session table if it does not exist yet and returns a session
/// layer that issues cookies expiring after a week of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session middleware ready to be layered on the router
/// - `Err(Error)` - Failed to run the session store migration
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|err| AppError::InternalError(format!("Session store migration failed: {err}")))?;

    Ok(SessionManagerLayer::new(store)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Builds the HTTP client used for external API requests.
///
/// Redirects are disabled so that OAuth provider responses cannot steer
/// requests to unexpected hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Configures the OAuth2 client for the Google login flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client pointed at Google's auth and token endpoints
/// - `Err(Error)` - One of the configured URLs failed to parse
pub fn setup_google_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(parse_url(AuthUrl::new, &config.google_auth_url)?)
        .set_token_uri(parse_url(TokenUrl::new, &config.google_token_url)?)
        .set_redirect_uri(parse_url(RedirectUrl::new, &config.google_redirect_url)?);

    Ok(client)
}

/// Configures the OAuth2 client for the Facebook login flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client pointed at Facebook's auth and token endpoints
/// - `Err(Error)` - One of the configured URLs failed to parse
pub fn setup_facebook_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.facebook_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.facebook_client_secret.clone()))
        .set_auth_uri(parse_url(AuthUrl::new, &config.facebook_auth_url)?)
        .set_token_uri(parse_url(TokenUrl::new, &config.facebook_token_url)?)
        .set_redirect_uri(parse_url(RedirectUrl::new, &config.facebook_redirect_url)?);

    Ok(client)
}

fn parse_url<T>(
    constructor: impl FnOnce(String) -> Result<T, url::ParseError>,
    url: &str,
) -> Result<T, AppError> {
    constructor(url.to_string())
        .map_err(|err| ConfigError::InvalidUrl(url.to_string(), err).into())
}
