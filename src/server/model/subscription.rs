//! Subscription package domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::subscription::{CreateSubscriptionPackageDto, SubscriptionPackageDto};

/// A purchasable posting plan offered to vendors.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPackage {
    pub id: i32,
    pub package_name: String,
    /// Number of concurrent listings the plan allows.
    pub car_post_slot: i32,
    pub price: f64,
    /// Plan duration in days.
    pub duration_in_day: i32,
    pub created_at: DateTime<Utc>,
}

impl SubscriptionPackage {
    /// Converts an entity model to a package domain model at the repository boundary.
    pub fn from_entity(entity: entity::subscription_package::Model) -> Self {
        Self {
            id: entity.id,
            package_name: entity.package_name,
            car_post_slot: entity.car_post_slot,
            price: entity.price,
            duration_in_day: entity.duration_in_day,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SubscriptionPackageDto {
        SubscriptionPackageDto {
            id: self.id,
            package_name: self.package_name,
            car_post_slot: self.car_post_slot,
            price: format!("{:.2}", self.price),
            duration_in_day: self.duration_in_day,
        }
    }
}

/// Parameters for creating a subscription package.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionPackageParams {
    pub package_name: String,
    pub car_post_slot: i32,
    pub price: f64,
    pub duration_in_day: i32,
}

impl CreateSubscriptionPackageParams {
    pub fn from_dto(dto: CreateSubscriptionPackageDto) -> Self {
        Self {
            package_name: dto.package_name,
            car_post_slot: dto.car_post_slot,
            price: dto.price,
            duration_in_day: dto.duration_in_day,
        }
    }
}
