use super::*;

/// Tests soft deleting a listing.
///
/// Verifies that the row is stamped rather than removed, disappears from
/// lookups and search, and that a second delete reports nothing to do.
///
/// Expected: Ok(true) then Ok(false), row retained with deleted_at set
#[tokio::test]
async fn stamps_row_and_hides_it_from_queries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, _, listing) =
        factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = ListingRepository::new(db);

    assert!(repo.soft_delete(listing.id).await?);

    // The row still exists but carries a deletion timestamp
    let raw = entity::prelude::Listing::find_by_id(listing.id)
        .one(db)
        .await?
        .unwrap();
    assert!(raw.deleted_at.is_some());

    // Hidden from lookups and search
    assert!(repo.get_by_id(listing.id).await?.is_none());
    assert!(repo.get_row_by_id(listing.id).await?.is_none());

    let (rows, total) = repo
        .search(
            &ListingFilter::default(),
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 0);

    // Deleting again is a no-op
    assert!(!repo.soft_delete(listing.id).await?);

    Ok(())
}

/// Tests that updating a soft deleted listing is refused.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_skips_deleted_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, _, listing) =
        factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = ListingRepository::new(db);
    repo.soft_delete(listing.id).await?;

    let updated = repo
        .update(
            listing.id,
            crate::server::model::listing::UpdateListingParams {
                price: 123_456.0,
                pre_discount_price: None,
                is_discount: false,
                mileage: 10_000,
                year: 2021,
                override_specification: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
