//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for the two login identities the
//! marketplace carries: customers (buyers) and vendor users (dealership staff).
//! Each wrapper exposes only the session keys for its concern, preventing typos
//! and keeping session-related logic in one place. A third wrapper pins the
//! OAuth CSRF token between the login redirect and the provider callback.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_CUSTOMER_ID: &str = "auth:customer";
const SESSION_VENDOR_USER_ID: &str = "auth:vendor_user";
const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";
const SESSION_OAUTH_PROVIDER: &str = "oauth:provider";

/// Customer authentication session state.
pub struct CustomerSession<'a> {
    session: &'a Session,
}

impl<'a> CustomerSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the customer's id after a successful login.
    pub async fn set_customer_id(&self, customer_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_CUSTOMER_ID, customer_id).await?;
        Ok(())
    }

    /// The logged-in customer's id, if any.
    pub async fn customer_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_CUSTOMER_ID).await?)
    }

    /// Ends the customer's login session.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_CUSTOMER_ID).await?;
        Ok(())
    }
}

/// Vendor user authentication session state.
pub struct VendorSession<'a> {
    session: &'a Session,
}

impl<'a> VendorSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the vendor user's id after a successful login.
    pub async fn set_vendor_user_id(&self, vendor_user_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_VENDOR_USER_ID, vendor_user_id)
            .await?;
        Ok(())
    }

    /// The logged-in vendor user's id, if any.
    pub async fn vendor_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_VENDOR_USER_ID).await?)
    }

    /// Ends the vendor user's login session.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.remove::<i32>(SESSION_VENDOR_USER_ID).await?;
        Ok(())
    }
}

/// Temporary OAuth flow state between the login redirect and the callback.
pub struct OauthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OauthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Pins the CSRF token and provider name issued with the login redirect.
    pub async fn begin(&self, csrf_token: &str, provider: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_OAUTH_CSRF_TOKEN, csrf_token)
            .await?;
        self.session.insert(SESSION_OAUTH_PROVIDER, provider).await?;
        Ok(())
    }

    /// Takes the pinned CSRF token, removing it so it cannot be replayed.
    pub async fn take_csrf_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(SESSION_OAUTH_CSRF_TOKEN).await?)
    }

    /// Takes the pinned provider name.
    pub async fn take_provider(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(SESSION_OAUTH_PROVIDER).await?)
    }
}
