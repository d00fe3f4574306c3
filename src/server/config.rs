use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const FACEBOOK_AUTH_URL: &str = "https://www.facebook.com/v19.0/dialog/oauth";
const FACEBOOK_TOKEN_URL: &str = "https://graph.facebook.com/v19.0/oauth/access_token";

pub struct Config {
    pub database_url: String,
    pub app_url: String,

    /// Directory where uploaded media files are written.
    pub media_dir: String,
    /// Public base URL under which `media_dir` is served.
    pub media_base_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,

    pub facebook_client_id: String,
    pub facebook_client_secret: String,
    pub facebook_redirect_url: String,

    pub facebook_auth_url: String,
    pub facebook_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?,
            media_dir: std::env::var("MEDIA_DIR").unwrap_or_else(|_| "media".to_string()),
            media_base_url: std::env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| "/media".to_string()),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_ID".to_string()))?,
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_SECRET".to_string()))?,
            google_redirect_url: std::env::var("GOOGLE_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_REDIRECT_URL".to_string()))?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            facebook_client_id: std::env::var("FACEBOOK_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("FACEBOOK_CLIENT_ID".to_string()))?,
            facebook_client_secret: std::env::var("FACEBOOK_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("FACEBOOK_CLIENT_SECRET".to_string()))?,
            facebook_redirect_url: std::env::var("FACEBOOK_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("FACEBOOK_REDIRECT_URL".to_string()))?,
            facebook_auth_url: FACEBOOK_AUTH_URL.to_string(),
            facebook_token_url: FACEBOOK_TOKEN_URL.to_string(),
        })
    }
}
