//! Authentication guards for the two login identities.
//!
//! Guards resolve the session's stored id back to a live database row, so a
//! deleted account is rejected even while its session cookie is still valid.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{customer::CustomerRepository, vendor::VendorUserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::{CustomerSession, VendorSession},
};

/// Guard for endpoints that require a logged-in customer.
pub struct CustomerGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> CustomerGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in, non-deleted customer.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated customer
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - No customer id in the session
    /// - `Err(AppError::AuthErr(AccountNotInDatabase))` - The session points
    ///   at a deleted or unknown account
    pub async fn require(&self) -> Result<entity::customer::Model, AppError> {
        let Some(customer_id) = CustomerSession::new(self.session).customer_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(customer) = CustomerRepository::new(self.db).get_by_id(customer_id).await? else {
            return Err(AuthError::AccountNotInDatabase(customer_id).into());
        };

        Ok(customer)
    }

    /// The logged-in customer if there is one, for endpoints that work for
    /// guests too (view logging attribution).
    pub async fn optional(&self) -> Result<Option<entity::customer::Model>, AppError> {
        let Some(customer_id) = CustomerSession::new(self.session).customer_id().await? else {
            return Ok(None);
        };

        Ok(CustomerRepository::new(self.db).get_by_id(customer_id).await?)
    }
}

/// Guard for endpoints that require a logged-in vendor user.
pub struct VendorGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> VendorGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in vendor user.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated vendor user, carrying the vendor id
    ///   used for ownership checks
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - No vendor user id in the session
    /// - `Err(AppError::AuthErr(AccountNotInDatabase))` - The session points
    ///   at an unknown account
    pub async fn require(&self) -> Result<entity::vendor_user::Model, AppError> {
        let Some(vendor_user_id) = VendorSession::new(self.session).vendor_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(user) = VendorUserRepository::new(self.db)
            .get_by_id(vendor_user_id)
            .await?
        else {
            return Err(AuthError::AccountNotInDatabase(vendor_user_id).into());
        };

        Ok(user)
    }
}
