use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::query::page::PageSlice;

pub struct BrandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a brand.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created brand
    /// - `Err(DbErr)` - Database error (duplicate name)
    pub async fn create(&self, name: String) -> Result<entity::brand::Model, DbErr> {
        entity::brand::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::brand::Model>, DbErr> {
        entity::prelude::Brand::find_by_id(id).one(self.db).await
    }

    /// Lists brands ordered by id, optionally sliced.
    ///
    /// # Returns
    /// - `Ok((brands, total))` - Page of brands and the total brand count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        slice: PageSlice,
    ) -> Result<(Vec<entity::brand::Model>, u64), DbErr> {
        let total = entity::prelude::Brand::find().count(self.db).await?;

        let brands = entity::prelude::Brand::find()
            .order_by_asc(entity::brand::Column::Id)
            .offset(slice.skip)
            .limit(slice.take)
            .all(self.db)
            .await?;

        Ok((brands, total))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::brand::Model>, DbErr> {
        entity::prelude::Brand::find()
            .filter(entity::brand::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
