//! Provider profile payloads returned by OAuth userinfo endpoints.

use serde::Deserialize;

/// Profile returned by Google's OpenID userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub verified_email: bool,
    pub given_name: String,
    pub family_name: Option<String>,
}

/// Profile returned by Facebook's Graph `me` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FacebookUserInfo {
    pub id: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}
