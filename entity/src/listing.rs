use sea_orm::entity::prelude::*;

/// A vendor's offer for a catalog car. Market-specific attributes (price,
/// mileage, year) override the catalog values for display. Rows are soft
/// deleted by setting `deleted_at`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub car_id: i32,
    pub vendor_id: i32,
    pub price: f64,
    pub pre_discount_price: Option<f64>,
    pub is_discount: bool,
    pub mileage: i32,
    pub year: i32,
    pub override_specification: Option<Json>,
    pub view_count: i32,
    pub favorite_count: i32,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id"
    )]
    Car,
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
    #[sea_orm(has_many = "super::listing_picture::Entity")]
    ListingPicture,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::listing_view::Entity")]
    ListingView,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::listing_picture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingPicture.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::listing_view::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingView.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
