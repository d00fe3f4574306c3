//! Vendor domain models and parameters.
//!
//! A vendor is a dealership with one or more user accounts. The first user's
//! profile picture doubles as the vendor's marketplace avatar.

use chrono::{DateTime, Utc};

use crate::{
    model::vendor::{CreateVendorDto, RegisterVendorUserDto, VendorDto, VendorUserDto},
    server::util::media::media_url,
};

/// Dealership with display profile and optional logo image.
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    /// Unique identifier for the vendor.
    pub id: i32,
    /// Display name shown on listings.
    pub name: String,
    /// Street address of the dealership.
    pub address: String,
    /// Storage path of the logo image, when uploaded.
    pub logo_path: Option<String>,
    /// Stored filename of the logo image.
    pub logo_name: Option<String>,
    /// Timestamp when the vendor was created.
    pub created_at: DateTime<Utc>,
}

impl Vendor {
    /// Converts an entity model to a vendor domain model at the repository boundary.
    pub fn from_entity(entity: entity::vendor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            logo_path: entity.logo_path,
            logo_name: entity.logo_name,
            created_at: entity.created_at,
        }
    }

    /// Converts the vendor to its public DTO, resolving the logo URL against
    /// the media base URL.
    pub fn into_dto(self, media_base: &str) -> VendorDto {
        let logo_url = match (&self.logo_path, &self.logo_name) {
            (Some(path), Some(name)) => Some(media_url(media_base, path, name)),
            _ => None,
        };

        VendorDto {
            id: self.id,
            name: self.name,
            address: self.address,
            logo_url,
        }
    }
}

/// Staff account belonging to a vendor.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorUser {
    /// Unique identifier for the account.
    pub id: i32,
    /// ID of the vendor this account belongs to.
    pub vendor_id: i32,
    /// Login username, unique across vendor users.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Argon2 password hash.
    pub password_hash: String,
    /// Whether the contact email has been verified.
    pub email_verified: bool,
    /// Storage path of the profile picture, when uploaded.
    pub picture_path: Option<String>,
    /// Stored filename of the profile picture.
    pub picture_name: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl VendorUser {
    /// Converts an entity model to a vendor user domain model at the repository boundary.
    pub fn from_entity(entity: entity::vendor_user::Model) -> Self {
        Self {
            id: entity.id,
            vendor_id: entity.vendor_id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            email_verified: entity.email_verified,
            picture_path: entity.picture_path,
            picture_name: entity.picture_name,
            created_at: entity.created_at,
        }
    }

    /// Converts the account to its public DTO, dropping the password hash.
    pub fn into_dto(self, media_base: &str) -> VendorUserDto {
        let picture_url = match (&self.picture_path, &self.picture_name) {
            (Some(path), Some(name)) => Some(media_url(media_base, path, name)),
            _ => None,
        };

        VendorUserDto {
            id: self.id,
            vendor_id: self.vendor_id,
            username: self.username,
            email: self.email,
            email_verified: self.email_verified,
            picture_url,
        }
    }
}

/// Parameters for creating a vendor profile.
#[derive(Debug, Clone)]
pub struct CreateVendorParams {
    pub name: String,
    pub address: String,
}

impl CreateVendorParams {
    pub fn from_dto(dto: CreateVendorDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
        }
    }
}

/// Parameters for registering a vendor user account.
#[derive(Debug, Clone)]
pub struct RegisterVendorUserParams {
    /// ID of the vendor the account belongs to.
    pub vendor_id: i32,
    /// Login username.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
}

impl RegisterVendorUserParams {
    /// Combines the registration DTO with the service-generated password hash.
    pub fn from_dto(dto: RegisterVendorUserDto, password_hash: String) -> Self {
        Self {
            vendor_id: dto.vendor_id,
            username: dto.username,
            email: dto.email,
            password_hash,
        }
    }
}
