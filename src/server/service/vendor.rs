//! Vendor service for dealership profiles and staff accounts.

use sea_orm::DatabaseConnection;

use crate::{
    model::vendor::{CreateVendorDto, RegisterVendorUserDto, VendorDto, VendorUserDto},
    server::{
        data::vendor::{VendorRepository, VendorUserRepository},
        error::AppError,
        model::vendor::{CreateVendorParams, RegisterVendorUserParams, Vendor, VendorUser},
        service::auth::hash_password,
    },
};

pub struct VendorService<'a> {
    db: &'a DatabaseConnection,
    media_base: &'a str,
}

impl<'a> VendorService<'a> {
    pub fn new(db: &'a DatabaseConnection, media_base: &'a str) -> Self {
        Self { db, media_base }
    }

    /// Creates a vendor profile.
    pub async fn create(&self, dto: CreateVendorDto) -> Result<VendorDto, AppError> {
        let vendor = VendorRepository::new(self.db)
            .create(CreateVendorParams::from_dto(dto))
            .await?;

        Ok(Vendor::from_entity(vendor).into_dto(self.media_base))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VendorDto, AppError> {
        let vendor = VendorRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

        Ok(Vendor::from_entity(vendor).into_dto(self.media_base))
    }

    /// Stores an uploaded vendor logo.
    pub async fn set_logo(
        &self,
        id: i32,
        path: String,
        name: String,
    ) -> Result<VendorDto, AppError> {
        let vendor = VendorRepository::new(self.db)
            .set_logo(id, path, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

        Ok(Vendor::from_entity(vendor).into_dto(self.media_base))
    }

    /// Registers a staff account under an existing vendor.
    ///
    /// # Returns
    /// - `Ok(VendorUserDto)` - The created account's public profile
    /// - `Err(AppError::NotFound)` - No such vendor
    /// - `Err(AppError::BadRequest)` - The username is already taken
    pub async fn register_user(
        &self,
        dto: RegisterVendorUserDto,
    ) -> Result<VendorUserDto, AppError> {
        let vendor_repo = VendorRepository::new(self.db);
        let user_repo = VendorUserRepository::new(self.db);

        vendor_repo
            .get_by_id(dto.vendor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

        if user_repo.find_by_username(&dto.username).await?.is_some() {
            return Err(AppError::BadRequest(
                "This username is already taken".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password)?;
        let user = user_repo
            .create(RegisterVendorUserParams::from_dto(dto, password_hash))
            .await?;

        Ok(VendorUser::from_entity(user).into_dto(self.media_base))
    }

    /// Stores an uploaded profile picture for a staff account.
    pub async fn set_user_picture(
        &self,
        user_id: i32,
        path: String,
        name: String,
    ) -> Result<VendorUserDto, AppError> {
        let user = VendorUserRepository::new(self.db)
            .set_picture(user_id, path, name)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor user not found".to_string()))?;

        Ok(VendorUser::from_entity(user).into_dto(self.media_base))
    }
}
