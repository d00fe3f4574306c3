use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::subscription::CreateSubscriptionPackageParams;

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subscription package.
    pub async fn create(
        &self,
        params: CreateSubscriptionPackageParams,
    ) -> Result<entity::subscription_package::Model, DbErr> {
        entity::subscription_package::ActiveModel {
            package_name: ActiveValue::Set(params.package_name),
            car_post_slot: ActiveValue::Set(params.car_post_slot),
            price: ActiveValue::Set(params.price),
            duration_in_day: ActiveValue::Set(params.duration_in_day),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists every offered package, cheapest first.
    pub async fn get_all(&self) -> Result<Vec<entity::subscription_package::Model>, DbErr> {
        entity::prelude::SubscriptionPackage::find()
            .order_by_asc(entity::subscription_package::Column::Price)
            .all(self.db)
            .await
    }
}
