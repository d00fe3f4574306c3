//! Listing service for marketplace search, statistics, and vendor inventory.
//!
//! Composes the paginator, filter compiler, and statistics aggregator into the
//! operations the listing endpoints expose. Reshapes denormalized repository
//! rows into flat view models with resolved picture URLs.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        listing::{CreateListingDto, ListingDto, PaginatedListingsDto, UpdateListingDto},
        stats::{ClassHistogramDto, DimensionStatsDto},
    },
    server::{
        data::{favorite::FavoriteRepository, listing::ListingRepository, vendor::VendorRepository},
        error::{auth::AuthError, AppError},
        model::listing::{CreateListingParams, ListingPage, ListingRow, UpdateListingParams},
        query::{
            filter::{ListingFilter, SortField, SortOrder},
            page::PageSlice,
            stats::{Dimension, DimensionStats},
        },
        util::media::media_url,
    },
};

/// Number of rows returned by the recommendation rail.
const RECOMMENDED_AMOUNT: u64 = 10;

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
    media_base: &'a str,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection, media_base: &'a str) -> Self {
        Self { db, media_base }
    }

    /// Searches marketplace listings.
    ///
    /// Resolves pagination defaults: an omitted page/page size pair means
    /// "return everything", reported as page 1 with the total as the page
    /// size.
    ///
    /// # Arguments
    /// - `filter` - Validated search parameters
    /// - `sort_by` / `sort_order` - Ordering of the result page
    /// - `page` / `page_size` - Both-or-neither pagination parameters
    ///
    /// # Returns
    /// - `Ok(PaginatedListingsDto)` - Page of flat view models with totals
    /// - `Err(AppError::QueryErr)` - Malformed pagination, range, or sort field
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        filter: &ListingFilter,
        sort_by: SortField,
        sort_order: SortOrder,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<PaginatedListingsDto, AppError> {
        let slice = PageSlice::new(page, page_size)?;

        let repo = ListingRepository::new(self.db);
        let (rows, total) = repo.search(filter, sort_by, sort_order, slice).await?;

        let listings = self.resolve_rows(rows.clone()).await?;

        let page = ListingPage {
            rows,
            total,
            page: page.unwrap_or(1),
            page_size: page_size.unwrap_or(total),
        };

        Ok(page.into_dto(listings))
    }

    /// Gets one listing and records the view.
    ///
    /// View logging must never fail the read: a failed audit insert is
    /// logged and the listing is still returned.
    ///
    /// # Arguments
    /// - `id` - The listing id
    /// - `viewer` - The viewing customer's id, or None for a guest
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - The flat view model
    /// - `Err(AppError::NotFound)` - No such listing, or it was soft deleted
    pub async fn get_by_id(&self, id: i32, viewer: Option<i32>) -> Result<ListingDto, AppError> {
        let repo = ListingRepository::new(self.db);

        let row = repo
            .get_row_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

        if let Err(err) = repo.log_view(id, viewer).await {
            tracing::warn!("Failed to log view for listing {}: {}", id, err);
        }

        let mut listings = self.resolve_rows(vec![row]).await?;

        listings
            .pop()
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))
    }

    /// The most viewed listings, for the home page recommendation rail.
    ///
    /// # Arguments
    /// - `amount` - How many listings to return, defaulting to ten
    ///
    /// # Returns
    /// - `Ok(Vec<ListingDto>)` - Up to `amount` listings by view count
    /// - `Err(AppError::BadRequest)` - `amount` was zero
    pub async fn get_recommended(&self, amount: Option<u64>) -> Result<Vec<ListingDto>, AppError> {
        if amount == Some(0) {
            return Err(AppError::BadRequest(
                "amount must be at least 1".to_string(),
            ));
        }

        let repo = ListingRepository::new(self.db);
        let rows = repo
            .get_recommended(amount.unwrap_or(RECOMMENDED_AMOUNT))
            .await?;

        self.resolve_rows(rows).await
    }

    /// A customer's favorited listings as flat view models.
    pub async fn get_favorites(&self, customer_id: i32) -> Result<Vec<ListingDto>, AppError> {
        let favorite_repo = FavoriteRepository::new(self.db);
        let listing_repo = ListingRepository::new(self.db);

        let ids: Vec<i32> = favorite_repo
            .get_by_customer(customer_id)
            .await?
            .into_iter()
            .map(|favorite| favorite.listing_id)
            .collect();

        let rows = listing_repo.get_rows_by_ids(&ids).await?;

        self.resolve_rows(rows).await
    }

    /// Creates a listing under the authenticated vendor's inventory.
    pub async fn create(
        &self,
        dto: CreateListingDto,
        vendor_id: i32,
    ) -> Result<ListingDto, AppError> {
        let repo = ListingRepository::new(self.db);

        let listing = repo
            .create(CreateListingParams::from_dto(dto, vendor_id))
            .await?;

        let row = repo
            .get_row_by_id(listing.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing not found after creation".to_string()))?;

        let mut listings = self.resolve_rows(vec![row]).await?;

        listings
            .pop()
            .ok_or_else(|| AppError::NotFound("Listing not found after creation".to_string()))
    }

    /// Updates a listing after checking the vendor owns it.
    ///
    /// # Returns
    /// - `Ok(ListingDto)` - The updated flat view model
    /// - `Err(AppError::NotFound)` - No such listing
    /// - `Err(AppError::AuthErr(AccessDenied))` - The listing belongs to a
    ///   different vendor
    pub async fn update(
        &self,
        id: i32,
        vendor_id: i32,
        dto: UpdateListingDto,
    ) -> Result<ListingDto, AppError> {
        let repo = ListingRepository::new(self.db);

        self.check_ownership(&repo, id, vendor_id).await?;

        repo.update(id, UpdateListingParams::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

        let row = repo
            .get_row_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

        let mut listings = self.resolve_rows(vec![row]).await?;

        listings
            .pop()
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))
    }

    /// Soft deletes a listing after checking the vendor owns it.
    pub async fn delete(&self, id: i32, vendor_id: i32) -> Result<(), AppError> {
        let repo = ListingRepository::new(self.db);

        self.check_ownership(&repo, id, vendor_id).await?;

        if !repo.soft_delete(id).await? {
            return Err(AppError::NotFound("Listing not found".to_string()));
        }

        Ok(())
    }

    /// Attaches an uploaded picture to a vendor's own listing.
    pub async fn add_picture(
        &self,
        id: i32,
        vendor_id: i32,
        path: String,
        name: String,
    ) -> Result<String, AppError> {
        let repo = ListingRepository::new(self.db);

        self.check_ownership(&repo, id, vendor_id).await?;

        let picture = repo.add_picture(id, path, name).await?;

        Ok(media_url(self.media_base, &picture.path, &picture.name))
    }

    /// Computes the distribution histogram for one dimension over the
    /// listings matching `filter`.
    ///
    /// # Returns
    /// - `Ok(DimensionStatsDto)` - Histograms for every class of the dimension
    /// - `Err(AppError::QueryErr(NoData))` - No listings match the filter
    pub async fn get_stats(
        &self,
        dimension: Dimension,
        filter: &ListingFilter,
    ) -> Result<DimensionStatsDto, AppError> {
        let repo = ListingRepository::new(self.db);

        let stats = match dimension {
            Dimension::Price => repo.get_price_stats(filter).await?,
            Dimension::Mileage => repo.get_mileage_stats(filter).await?,
        };

        Ok(stats_dto(stats))
    }

    async fn check_ownership(
        &self,
        repo: &ListingRepository<'_>,
        id: i32,
        vendor_id: i32,
    ) -> Result<(), AppError> {
        let listing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

        if listing.vendor_id != vendor_id {
            return Err(AuthError::AccessDenied(
                vendor_id,
                format!("listing {}", id),
            )
            .into());
        }

        Ok(())
    }

    /// Resolves pictures and vendor display pictures for a batch of rows and
    /// converts them to flat view models.
    async fn resolve_rows(&self, rows: Vec<ListingRow>) -> Result<Vec<ListingDto>, AppError> {
        let listing_repo = ListingRepository::new(self.db);
        let vendor_repo = VendorRepository::new(self.db);

        let listing_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let vendor_ids: Vec<i32> = rows.iter().map(|row| row.vendor_id).collect();

        let mut pictures = listing_repo.get_pictures(&listing_ids).await?;
        let vendor_pictures = vendor_repo.get_display_pictures(&vendor_ids).await?;

        let listings = rows
            .into_iter()
            .map(|row| {
                let picture_urls = pictures
                    .remove(&row.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|picture| media_url(self.media_base, &picture.path, &picture.name))
                    .collect();

                let vendor_picture = vendor_pictures
                    .get(&row.vendor_id)
                    .map(|(path, name)| media_url(self.media_base, path, name));

                row.into_dto(picture_urls, vendor_picture)
            })
            .collect();

        Ok(listings)
    }
}

fn stats_dto(stats: DimensionStats) -> DimensionStatsDto {
    DimensionStatsDto {
        dimension: stats.dimension.to_string(),
        classes: stats
            .classes
            .into_iter()
            .map(|class| ClassHistogramDto {
                class: class.class.to_string(),
                bar_count: class.bar_count,
                bar_range: class.bar_range,
                min_value: class.min_value,
                max_value: class.max_value,
                bars: class.bars,
            })
            .collect(),
    }
}
