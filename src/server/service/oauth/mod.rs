//! OAuth2 login with Google and Facebook.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

/// OAuth provider supported for customer login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OauthProvider {
    Google,
    Facebook,
}

impl OauthProvider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }

    /// Resolves a provider from its path segment or session value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "google" => Some(Self::Google),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }

    /// The provider's userinfo endpoint, queried with the bearer token after
    /// the code exchange.
    fn userinfo_url(&self) -> &'static str {
        match self {
            Self::Google => "https://www.googleapis.com/oauth2/v2/userinfo",
            Self::Facebook => "https://graph.facebook.com/me?fields=id,email,first_name,last_name",
        }
    }
}

pub struct OauthService<'a> {
    pub db: &'a DatabaseConnection,
    pub oauth_client: &'a OAuth2Client,
    pub http_client: &'a reqwest::Client,
    pub provider: OauthProvider,
}

impl<'a> OauthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        oauth_client: &'a OAuth2Client,
        http_client: &'a reqwest::Client,
        provider: OauthProvider,
    ) -> Self {
        Self {
            db,
            oauth_client,
            http_client,
            provider,
        }
    }
}
