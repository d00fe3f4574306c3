use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::review::CreateReviewParams;

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a customer's review of a catalog car.
    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            car_id: ActiveValue::Set(params.car_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists a customer's reviews, most recent first.
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
