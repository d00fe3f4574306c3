use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use crate::server::{
    error::AppError,
    model::catalog::{CarRow, CreateCarParams},
    query::{
        filter::{FieldMapping, ListingFilter, SortField, SortOrder},
        page::PageSlice,
    },
};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Base select for catalog reads: cars joined with their brand, category,
    /// and model.
    fn base_query() -> Select<entity::car::Entity> {
        entity::prelude::Car::find()
            .join(JoinType::InnerJoin, entity::car::Relation::Brand.def())
            .join(JoinType::InnerJoin, entity::car::Relation::Category.def())
            .join(JoinType::InnerJoin, entity::car::Relation::CarModel.def())
    }

    /// Denormalized row projection over [`Self::base_query`], aliased to match
    /// [`CarRow`].
    fn row_query() -> Select<entity::car::Entity> {
        Self::base_query()
            .select_only()
            .column(entity::car::Column::Id)
            .column(entity::car::Column::BrandId)
            .column_as(entity::brand::Column::Name, "brand_name")
            .column(entity::car::Column::CategoryId)
            .column_as(entity::category::Column::Name, "category_name")
            .column(entity::car::Column::ModelId)
            .column_as(entity::car_model::Column::Name, "model_name")
            .column(entity::car::Column::Year)
            .column(entity::car::Column::BasePrice)
            .column(entity::car::Column::Specifications)
    }

    /// Searches the catalog with the same filter compiler as the marketplace,
    /// targeted at catalog columns.
    ///
    /// Mileage and vendor parameters have no catalog counterpart and compile
    /// to no clause under the catalog mapping.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Page of denormalized catalog rows and the
    ///   total match count before slicing
    /// - `Err(AppError::QueryErr)` - Incoherent range or unmapped sort field
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        filter: &ListingFilter,
        sort_by: SortField,
        sort_order: SortOrder,
        slice: PageSlice,
    ) -> Result<(Vec<CarRow>, u64), AppError> {
        filter.validate()?;

        let mapping = FieldMapping::catalog();
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
            .into_model::<CarRow>()
            .all(self.db)
            .await?;

        Ok((rows, total))
    }

    /// Gets a single catalog car as a denormalized row.
    pub async fn get_row_by_id(&self, id: i32) -> Result<Option<CarRow>, DbErr> {
        Self::row_query()
            .filter(entity::car::Column::Id.eq(id))
            .into_model::<CarRow>()
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find_by_id(id).one(self.db).await
    }

    /// Creates a catalog car entry.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created car
    /// - `Err(DbErr)` - Database error (unknown brand, category, or model id)
    pub async fn create(&self, params: CreateCarParams) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            brand_id: ActiveValue::Set(params.brand_id),
            category_id: ActiveValue::Set(params.category_id),
            model_id: ActiveValue::Set(params.model_id),
            year: ActiveValue::Set(params.year),
            base_price: ActiveValue::Set(params.base_price),
            specifications: ActiveValue::Set(params.specifications),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Creates a model line under a brand.
    pub async fn create_model(
        &self,
        brand_id: i32,
        name: String,
    ) -> Result<entity::car_model::Model, DbErr> {
        entity::car_model::ActiveModel {
            brand_id: ActiveValue::Set(brand_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists the model lines of one brand, ordered by name.
    pub async fn get_models_by_brand(
        &self,
        brand_id: i32,
    ) -> Result<Vec<entity::car_model::Model>, DbErr> {
        entity::prelude::CarModel::find()
            .filter(entity::car_model::Column::BrandId.eq(brand_id))
            .order_by_asc(entity::car_model::Column::Name)
            .all(self.db)
            .await
    }
}
