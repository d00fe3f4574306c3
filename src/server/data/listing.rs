use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, IntoColumnRef};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::collections::HashMap;

use crate::server::{
    error::AppError,
    model::listing::{CreateListingParams, ListingRow, UpdateListingParams},
    query::{
        filter::{FieldMapping, ListingFilter, SortField, SortOrder},
        page::PageSlice,
        stats::{self, Dimension, DimensionStats},
    },
};

pub struct ListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Base select for all marketplace reads: listings joined with their car,
    /// brand, category, model, and vendor, with soft-deleted rows excluded.
    ///
    /// Every search, count, and statistics query starts from this select so
    /// that the soft-delete policy is applied in exactly one place.
    fn base_query() -> Select<entity::listing::Entity> {
        entity::prelude::Listing::find()
            .join(JoinType::InnerJoin, entity::listing::Relation::Car.def())
            .join(JoinType::InnerJoin, entity::car::Relation::Brand.def())
            .join(JoinType::InnerJoin, entity::car::Relation::Category.def())
            .join(JoinType::InnerJoin, entity::car::Relation::CarModel.def())
            .join(JoinType::InnerJoin, entity::listing::Relation::Vendor.def())
            .filter(entity::listing::Column::DeletedAt.is_null())
    }

    /// Denormalized row projection over [`Self::base_query`], aliased to match
    /// [`ListingRow`].
    fn row_query() -> Select<entity::listing::Entity> {
        Self::base_query()
            .select_only()
            .column(entity::listing::Column::Id)
            .column(entity::listing::Column::Price)
            .column(entity::listing::Column::PreDiscountPrice)
            .column(entity::listing::Column::IsDiscount)
            .column(entity::listing::Column::Mileage)
            .column(entity::listing::Column::Year)
            .column(entity::listing::Column::ViewCount)
            .column(entity::listing::Column::FavoriteCount)
            .column_as(entity::brand::Column::Name, "brand_name")
            .column_as(entity::category::Column::Name, "category_name")
            .column_as(entity::car_model::Column::Name, "model_name")
            .column(entity::listing::Column::VendorId)
            .column_as(entity::vendor::Column::Name, "vendor_name")
            .column_as(entity::vendor::Column::Address, "vendor_address")
            .column_as(entity::car::Column::Specifications, "base_specification")
            .column(entity::listing::Column::OverrideSpecification)
    }

    /// Searches listings with the compiled filter, ordering, and page slice.
    ///
    /// # Arguments
    /// - `filter` - Validated search parameters compiled into the predicate
    /// - `sort_by` - Sortable field resolved against the marketplace mapping
    /// - `sort_order` - Sort direction
    /// - `slice` - Skip/take pair; unbounded fetches all matching rows
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Page of denormalized rows and the total match
    ///   count before slicing
    /// - `Err(AppError::QueryErr)` - Incoherent range or unmapped sort field
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        filter: &ListingFilter,
        sort_by: SortField,
        sort_order: SortOrder,
        slice: PageSlice,
    ) -> Result<(Vec<ListingRow>, u64), AppError> {
        filter.validate()?;

        let mapping = FieldMapping::marketplace();
        let condition = filter.compile(&mapping);
        let order_col = sort_by.resolve(&mapping)?;

        let total = Self::base_query()
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let rows = Self::row_query()
            .filter(condition)
            .order_by(Expr::col(order_col), sort_order.into_order())
            .offset(slice.skip)
            .limit(slice.take)
            .into_model::<ListingRow>()
            .all(self.db)
            .await?;

        Ok((rows, total))
    }

    /// Gets a single non-deleted listing as a denormalized row.
    ///
    /// # Returns
    /// - `Ok(Some(row))` - The listing with related names joined in
    /// - `Ok(None)` - No such listing, or it has been soft deleted
    /// - `Err(DbErr)` - Database error
    pub async fn get_row_by_id(&self, id: i32) -> Result<Option<ListingRow>, DbErr> {
        Self::row_query()
            .filter(entity::listing::Column::Id.eq(id))
            .into_model::<ListingRow>()
            .one(self.db)
            .await
    }

    /// Gets several non-deleted listings as denormalized rows, for resolving
    /// a customer's favorites.
    pub async fn get_rows_by_ids(&self, ids: &[i32]) -> Result<Vec<ListingRow>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Self::row_query()
            .filter(entity::listing::Column::Id.is_in(ids.iter().copied()))
            .into_model::<ListingRow>()
            .all(self.db)
            .await
    }

    /// Gets a single non-deleted listing entity, without related data.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find_by_id(id)
            .filter(entity::listing::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// The most viewed non-deleted listings, for the recommendation rail.
    ///
    /// # Arguments
    /// - `amount` - Maximum number of rows to return
    pub async fn get_recommended(&self, amount: u64) -> Result<Vec<ListingRow>, DbErr> {
        Self::row_query()
            .order_by_desc(entity::listing::Column::ViewCount)
            .limit(amount)
            .into_model::<ListingRow>()
            .all(self.db)
            .await
    }

    /// Creates a new listing for a vendor.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created listing
    /// - `Err(DbErr)` - Database error (unknown car or vendor id)
    pub async fn create(
        &self,
        params: CreateListingParams,
    ) -> Result<entity::listing::Model, DbErr> {
        entity::listing::ActiveModel {
            car_id: ActiveValue::Set(params.car_id),
            vendor_id: ActiveValue::Set(params.vendor_id),
            price: ActiveValue::Set(params.price),
            pre_discount_price: ActiveValue::Set(params.pre_discount_price),
            is_discount: ActiveValue::Set(params.is_discount),
            mileage: ActiveValue::Set(params.mileage),
            year: ActiveValue::Set(params.year),
            override_specification: ActiveValue::Set(params.override_specification),
            view_count: ActiveValue::Set(0),
            favorite_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a listing's market attributes in place.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated listing
    /// - `Ok(None)` - No such listing, or it has been soft deleted
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateListingParams,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        let Some(listing) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::listing::ActiveModel = listing.into();
        active_model.price = ActiveValue::Set(params.price);
        active_model.pre_discount_price = ActiveValue::Set(params.pre_discount_price);
        active_model.is_discount = ActiveValue::Set(params.is_discount);
        active_model.mileage = ActiveValue::Set(params.mileage);
        active_model.year = ActiveValue::Set(params.year);
        active_model.override_specification = ActiveValue::Set(params.override_specification);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Soft deletes a listing by setting its `deleted_at` timestamp.
    ///
    /// The row is retained for favorites and view history; every read query
    /// excludes it from then on.
    ///
    /// # Returns
    /// - `Ok(true)` - The listing was marked deleted
    /// - `Ok(false)` - No such listing, or it was already deleted
    /// - `Err(DbErr)` - Database error
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Listing::update_many()
            .col_expr(
                entity::listing::Column::DeletedAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::listing::Column::Id.eq(id))
            .filter(entity::listing::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records a detail-page view: inserts an audit row and bumps the
    /// denormalized view counter.
    ///
    /// # Arguments
    /// - `listing_id` - The viewed listing
    /// - `customer_id` - The viewing customer, or None for a guest
    pub async fn log_view(&self, listing_id: i32, customer_id: Option<i32>) -> Result<(), DbErr> {
        entity::listing_view::ActiveModel {
            listing_id: ActiveValue::Set(listing_id),
            customer_id: ActiveValue::Set(customer_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::prelude::Listing::update_many()
            .col_expr(
                entity::listing::Column::ViewCount,
                Expr::col(entity::listing::Column::ViewCount).add(1),
            )
            .filter(entity::listing::Column::Id.eq(listing_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adjusts the denormalized favorite counter by `delta` (+1 or -1).
    pub async fn adjust_favorite_count(&self, listing_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Listing::update_many()
            .col_expr(
                entity::listing::Column::FavoriteCount,
                Expr::col(entity::listing::Column::FavoriteCount).add(delta),
            )
            .filter(entity::listing::Column::Id.eq(listing_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Attaches an uploaded picture to a listing.
    pub async fn add_picture(
        &self,
        listing_id: i32,
        path: String,
        name: String,
    ) -> Result<entity::listing_picture::Model, DbErr> {
        entity::listing_picture::ActiveModel {
            listing_id: ActiveValue::Set(listing_id),
            path: ActiveValue::Set(path),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Fetches the pictures of several listings in one query, grouped by
    /// listing id.
    pub async fn get_pictures(
        &self,
        listing_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::listing_picture::Model>>, DbErr> {
        if listing_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let pictures = entity::prelude::ListingPicture::find()
            .filter(entity::listing_picture::Column::ListingId.is_in(listing_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::listing_picture::Model>> = HashMap::new();
        for picture in pictures {
            grouped.entry(picture.listing_id).or_default().push(picture);
        }

        Ok(grouped)
    }

    /// Computes the price distribution of the listings matching `filter`.
    ///
    /// # Returns
    /// - `Ok(DimensionStats)` - Histograms for the eco, mid, high, and all
    ///   price classes
    /// - `Err(AppError::QueryErr(NoData))` - No listings match the filter
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_price_stats(&self, filter: &ListingFilter) -> Result<DimensionStats, AppError> {
        filter.validate()?;

        let mapping = FieldMapping::marketplace();
        let base = Self::base_query().filter(filter.compile(&mapping));

        stats::aggregate(self.db, base, &mapping.price, Dimension::Price).await
    }

    /// Computes the mileage distribution of the listings matching `filter`.
    ///
    /// # Returns
    /// - `Ok(DimensionStats)` - Histograms for the low, mid, high, and all
    ///   mileage classes
    /// - `Err(AppError::QueryErr(NoData))` - No listings match the filter
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_mileage_stats(
        &self,
        filter: &ListingFilter,
    ) -> Result<DimensionStats, AppError> {
        filter.validate()?;

        let mapping = FieldMapping::marketplace();
        let base = Self::base_query().filter(filter.compile(&mapping));
        let mileage = (entity::listing::Entity, entity::listing::Column::Mileage).into_column_ref();

        stats::aggregate(self.db, base, &mileage, Dimension::Mileage).await
    }
}
