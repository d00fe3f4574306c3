//! Local credential authentication for customers and vendor users.
//!
//! Passwords are hashed with Argon2 at registration; login verifies the
//! supplied password against the stored hash and stamps the last login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{CustomerLoginDto, VendorLoginDto},
    server::{
        data::{customer::CustomerRepository, vendor::VendorUserRepository},
        error::{auth::AuthError, AppError},
        model::{customer::Customer, vendor::VendorUser},
    },
};

/// Hashes a password with Argon2 and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-format hash string for storage
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AuthError::PasswordHash(err.to_string()))
}

/// Verifies a password against a stored PHC-format hash.
///
/// # Returns
/// - `Ok(true)` - The password matches
/// - `Ok(false)` - The password does not match
/// - `Err(AuthError::PasswordHash)` - The stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|err| AuthError::PasswordHash(err.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Authenticates a customer by email and password.
    ///
    /// OAuth-only accounts have no password hash and are rejected as invalid
    /// credentials rather than revealing how the account was created.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The authenticated customer, with last login stamped
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email, wrong
    ///   password, or an OAuth-only account
    pub async fn customer_login(&self, dto: CustomerLoginDto) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials(dto.email.clone()))?;

        let hash = customer
            .password_hash
            .as_deref()
            .ok_or_else(|| AuthError::InvalidCredentials(dto.email.clone()))?;

        if !verify_password(&dto.password, hash)? {
            return Err(AuthError::InvalidCredentials(dto.email).into());
        }

        repo.record_login(customer.id).await?;

        Ok(Customer::from_entity(customer))
    }

    /// Authenticates a vendor user by username and password.
    ///
    /// # Returns
    /// - `Ok(VendorUser)` - The authenticated account
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or
    ///   wrong password
    pub async fn vendor_login(&self, dto: VendorLoginDto) -> Result<VendorUser, AppError> {
        let repo = VendorUserRepository::new(self.db);

        let user = repo
            .find_by_username(&dto.username)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials(dto.username.clone()))?;

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(dto.username).into());
        }

        Ok(VendorUser::from_entity(user))
    }
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("hunter2").unwrap();

        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("hunter2", "not-a-phc-string").is_err());
    }
}
