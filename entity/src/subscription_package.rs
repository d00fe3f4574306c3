use sea_orm::entity::prelude::*;

/// A purchasable posting plan for vendors: how many concurrent listings the
/// plan allows and for how long.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscription_package")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub package_name: String,
    pub car_post_slot: i32,
    pub price: f64,
    pub duration_in_day: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
