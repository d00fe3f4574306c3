//! Subscription package service for vendor posting plans.

use sea_orm::DatabaseConnection;

use crate::{
    model::subscription::{CreateSubscriptionPackageDto, SubscriptionPackageDto},
    server::{
        data::subscription::SubscriptionRepository,
        error::AppError,
        model::subscription::{CreateSubscriptionPackageParams, SubscriptionPackage},
    },
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subscription package.
    ///
    /// # Returns
    /// - `Ok(SubscriptionPackageDto)` - The created package
    /// - `Err(AppError::BadRequest)` - A negative slot count, price, or duration
    pub async fn create(
        &self,
        dto: CreateSubscriptionPackageDto,
    ) -> Result<SubscriptionPackageDto, AppError> {
        if dto.car_post_slot < 0 || dto.price < 0.0 || dto.duration_in_day < 0 {
            return Err(AppError::BadRequest(
                "Slot count, price, and duration must not be negative".to_string(),
            ));
        }

        let package = SubscriptionRepository::new(self.db)
            .create(CreateSubscriptionPackageParams::from_dto(dto))
            .await?;

        Ok(SubscriptionPackage::from_entity(package).into_dto())
    }

    /// Lists every offered package, cheapest first.
    pub async fn get_all(&self) -> Result<Vec<SubscriptionPackageDto>, AppError> {
        let packages = SubscriptionRepository::new(self.db).get_all().await?;

        Ok(packages
            .into_iter()
            .map(|package| SubscriptionPackage::from_entity(package).into_dto())
            .collect())
    }
}
