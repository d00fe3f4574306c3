//! SeaORM entity definitions for the marketplace database schema.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its
//! table name for concise use in queries and test schema setup.

pub mod brand;
pub mod car;
pub mod car_model;
pub mod category;
pub mod customer;
pub mod favorite;
pub mod listing;
pub mod listing_picture;
pub mod listing_view;
pub mod review;
pub mod subscription_package;
pub mod vendor;
pub mod vendor_user;

pub mod prelude {
    pub use super::brand::Entity as Brand;
    pub use super::car::Entity as Car;
    pub use super::car_model::Entity as CarModel;
    pub use super::category::Entity as Category;
    pub use super::customer::Entity as Customer;
    pub use super::favorite::Entity as Favorite;
    pub use super::listing::Entity as Listing;
    pub use super::listing_picture::Entity as ListingPicture;
    pub use super::listing_view::Entity as ListingView;
    pub use super::review::Entity as Review;
    pub use super::subscription_package::Entity as SubscriptionPackage;
    pub use super::vendor::Entity as Vendor;
    pub use super::vendor_user::Entity as VendorUser;
}
