pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_brand_table;
mod m20260115_000002_create_category_table;
mod m20260115_000003_create_car_model_table;
mod m20260115_000004_create_car_table;
mod m20260116_000005_create_vendor_table;
mod m20260116_000006_create_vendor_user_table;
mod m20260117_000007_create_customer_table;
mod m20260117_000008_create_listing_table;
mod m20260117_000009_create_listing_picture_table;
mod m20260118_000010_create_favorite_table;
mod m20260118_000011_create_listing_view_table;
mod m20260119_000012_create_review_table;
mod m20260119_000013_create_subscription_package_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_brand_table::Migration),
            Box::new(m20260115_000002_create_category_table::Migration),
            Box::new(m20260115_000003_create_car_model_table::Migration),
            Box::new(m20260115_000004_create_car_table::Migration),
            Box::new(m20260116_000005_create_vendor_table::Migration),
            Box::new(m20260116_000006_create_vendor_user_table::Migration),
            Box::new(m20260117_000007_create_customer_table::Migration),
            Box::new(m20260117_000008_create_listing_table::Migration),
            Box::new(m20260117_000009_create_listing_picture_table::Migration),
            Box::new(m20260118_000010_create_favorite_table::Migration),
            Box::new(m20260118_000011_create_listing_view_table::Migration),
            Box::new(m20260119_000012_create_review_table::Migration),
            Box::new(m20260119_000013_create_subscription_package_table::Migration),
        ]
    }
}
