//! Customer domain models and parameters.
//!
//! Customers are buyers with either a local password account or an OAuth-linked
//! account. Registration parameters carry an already-hashed password so that raw
//! credentials never cross the repository boundary.

use chrono::{DateTime, Utc};

use crate::model::customer::{CustomerDto, RegisterCustomerDto, UpdateCustomerDto};

/// Buyer account with credentials and identity metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Unique identifier for the customer.
    pub id: i32,
    /// Short public identifier shown in URLs and support tooling.
    pub uid: String,
    /// Optional display username.
    pub username: Option<String>,
    /// Login email, unique across customers.
    pub email: String,
    /// Argon2 password hash; None for OAuth-only accounts.
    pub password_hash: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name, when provided.
    pub last_name: Option<String>,
    /// Whether the account was created through an OAuth provider.
    pub is_oauth: bool,
    /// Name of the OAuth provider, when `is_oauth` is set.
    pub oauth_provider: Option<String>,
    /// Whether the login email has been verified.
    pub email_verified: bool,
    /// Timestamp of the most recent successful login.
    pub last_login: Option<DateTime<Utc>>,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_oauth: entity.is_oauth,
            oauth_provider: entity.oauth_provider,
            email_verified: entity.email_verified,
            last_login: entity.last_login,
            created_at: entity.created_at,
        }
    }

    /// Converts the customer to its public DTO, dropping credential fields.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            uid: self.uid,
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            is_oauth: self.is_oauth,
            email_verified: self.email_verified,
            last_login: self.last_login,
        }
    }
}

/// Parameters for creating a local (password) customer account.
#[derive(Debug, Clone)]
pub struct RegisterCustomerParams {
    /// Short public identifier, generated at registration.
    pub uid: String,
    /// Login email.
    pub email: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name, when provided.
    pub last_name: Option<String>,
    /// Optional display username.
    pub username: Option<String>,
}

impl RegisterCustomerParams {
    /// Combines the registration DTO with service-generated credentials.
    pub fn from_dto(dto: RegisterCustomerDto, uid: String, password_hash: String) -> Self {
        Self {
            uid,
            email: dto.email,
            password_hash,
            first_name: dto.first_name,
            last_name: dto.last_name,
            username: dto.username,
        }
    }
}

/// Parameters for creating or locating a customer from an OAuth callback.
///
/// OAuth accounts have no password hash and arrive with a verified email.
#[derive(Debug, Clone)]
pub struct OauthCustomerParams {
    /// Short public identifier, generated when the account is first seen.
    pub uid: String,
    /// Email asserted by the provider.
    pub email: String,
    /// Given name from the provider's profile.
    pub first_name: String,
    /// Family name from the provider's profile, when present.
    pub last_name: Option<String>,
    /// Provider name ("google" or "facebook").
    pub provider: String,
}

/// Parameters for updating a customer's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateCustomerParams {
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl UpdateCustomerParams {
    pub fn from_dto(dto: UpdateCustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            username: dto.username,
        }
    }
}
