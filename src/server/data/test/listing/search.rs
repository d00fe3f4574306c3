use super::*;

/// Tests searching without any filters.
///
/// Verifies that an empty filter with an unbounded slice returns every
/// listing along with the correct total.
///
/// Expected: Ok((rows, total)) with all listings
#[tokio::test]
async fn returns_all_listings_when_unfiltered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car, vendor, _listing) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    factory::listing::create_listing(db, car.id, vendor.id).await?;
    factory::listing::create_listing(db, car.id, vendor.id).await?;

    let repo = ListingRepository::new(db);
    let (rows, total) = repo
        .search(
            &ListingFilter::default(),
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests filtering by brand id.
///
/// Creates two listings under different brands and verifies that filtering
/// by one brand id returns only that brand's listing, with the joined brand
/// name resolved on the row.
///
/// Expected: Ok with only the matching listing
#[tokio::test]
async fn filters_by_brand_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_a, _, _, _, _, listing_a) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    let (_brand_b, _, _, _, _, _listing_b) =
        factory::helpers::create_listing_with_dependencies(db).await?;

    let filter = ListingFilter {
        brand_ids: vec![brand_a.id],
        ..Default::default()
    };

    let repo = ListingRepository::new(db);
    let (rows, total) = repo
        .search(
            &filter,
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, listing_a.id);
    assert_eq!(rows[0].brand_name, brand_a.name);

    Ok(())
}

/// Tests that a price range only applies when both bounds are present.
///
/// A filter carrying only a minimum produces no price clause, so every
/// listing comes back. Supplying both bounds narrows the result.
///
/// Expected: single-bound filter matches all, two-bound filter narrows
#[tokio::test]
async fn price_range_requires_both_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car, vendor, _) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .price(250_000.0)
        .build()
        .await?;
    factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .price(900_000.0)
        .build()
        .await?;

    let repo = ListingRepository::new(db);

    // Minimum alone is ignored
    let min_only = ListingFilter {
        price_min: Some(800_000.0),
        ..Default::default()
    };
    let (_, total) = repo
        .search(
            &min_only,
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await
        .unwrap();
    assert_eq!(total, 3);

    // Both bounds narrow the result
    let both = ListingFilter {
        price_min: Some(800_000.0),
        price_max: Some(1_000_000.0),
        ..Default::default()
    };
    let (rows, total) = repo
        .search(
            &both,
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].price, 900_000.0);

    Ok(())
}

/// Tests that an inverted range is rejected before any query runs.
///
/// Expected: Err(AppError::QueryErr(InvalidRange))
#[tokio::test]
async fn rejects_inverted_price_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let filter = ListingFilter {
        price_min: Some(500_000.0),
        price_max: Some(100_000.0),
        ..Default::default()
    };

    let repo = ListingRepository::new(db);
    let result = repo
        .search(
            &filter,
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::QueryErr(QueryError::InvalidRange { .. }))
    ));

    Ok(())
}

/// Tests case-insensitive substring matching on the model name.
///
/// Expected: Ok with only the listing whose model name contains the needle
#[tokio::test]
async fn matches_model_name_substring_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let category = factory::category::create_category(db).await?;
    let corolla = factory::car_model::create_model_with_name(db, brand.id, "Corolla Cross").await?;
    let yaris = factory::car_model::create_model_with_name(db, brand.id, "Yaris").await?;
    let vendor = factory::vendor::create_vendor(db).await?;

    let car_corolla = factory::car::create_car(db, brand.id, category.id, corolla.id).await?;
    let car_yaris = factory::car::create_car(db, brand.id, category.id, yaris.id).await?;
    let listing_corolla = factory::listing::create_listing(db, car_corolla.id, vendor.id).await?;
    factory::listing::create_listing(db, car_yaris.id, vendor.id).await?;

    let filter = ListingFilter {
        model_name: Some("COROLLA".to_string()),
        ..Default::default()
    };

    let repo = ListingRepository::new(db);
    let (rows, total) = repo
        .search(
            &filter,
            SortField::default(),
            SortOrder::default(),
            PageSlice::unbounded(),
        )
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows[0].id, listing_corolla.id);
    assert_eq!(rows[0].model_name, "Corolla Cross");

    Ok(())
}

/// Tests sorting by price in descending order.
///
/// Expected: Ok with rows ordered by price, highest first
#[tokio::test]
async fn sorts_by_price_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car, vendor, _) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .price(900_000.0)
        .build()
        .await?;
    factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .price(150_000.0)
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let (rows, _) = repo
        .search(
            &ListingFilter::default(),
            SortField::Price,
            SortOrder::Desc,
            PageSlice::unbounded(),
        )
        .await
        .unwrap();

    let prices: Vec<f64> = rows.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![900_000.0, 600_000.0, 150_000.0]);

    Ok(())
}

/// Tests that pagination slices the result while the total stays unsliced.
///
/// Expected: Ok with one page of rows and the full match count
#[tokio::test]
async fn paginates_with_full_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car, vendor, _) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    for _ in 0..4 {
        factory::listing::create_listing(db, car.id, vendor.id).await?;
    }

    let slice = PageSlice::new(Some(2), Some(2)).unwrap();

    let repo = ListingRepository::new(db);
    let (rows, total) = repo
        .search(
            &ListingFilter::default(),
            SortField::default(),
            SortOrder::default(),
            slice,
        )
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests pagination over a filtered set.
///
/// Verifies that the reported total counts only the listings matching the
/// brand filter, not the whole table.
///
/// Expected: Ok with the second page of the filtered set and its total
#[tokio::test]
async fn filtered_pagination_counts_only_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand, _, _, car, vendor, _) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    for _ in 0..2 {
        factory::listing::create_listing(db, car.id, vendor.id).await?;
    }
    // A listing under another brand that must not appear in the totals.
    factory::helpers::create_listing_with_dependencies(db).await?;

    let filter = ListingFilter {
        brand_ids: vec![brand.id],
        ..Default::default()
    };
    let slice = PageSlice::new(Some(2), Some(2)).unwrap();

    let repo = ListingRepository::new(db);
    let (rows, total) = repo
        .search(&filter, SortField::default(), SortOrder::default(), slice)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that repeating a search over unchanged data returns the same page.
///
/// Two searches with identical filter, sort, and slice parameters must
/// produce identical rows and totals.
///
/// Expected: both calls return equal results
#[tokio::test]
async fn repeated_search_returns_identical_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand, _, _, car, vendor, _) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    for _ in 0..3 {
        factory::listing::create_listing(db, car.id, vendor.id).await?;
    }

    let filter = ListingFilter {
        brand_ids: vec![brand.id],
        ..Default::default()
    };
    let slice = PageSlice::new(Some(1), Some(2)).unwrap();

    let repo = ListingRepository::new(db);
    let (first_rows, first_total) = repo
        .search(&filter, SortField::Price, SortOrder::Desc, slice)
        .await
        .unwrap();
    let (second_rows, second_total) = repo
        .search(&filter, SortField::Price, SortOrder::Desc, slice)
        .await
        .unwrap();

    assert_eq!(first_rows, second_rows);
    assert_eq!(first_total, second_total);
    assert_eq!(first_rows.len(), 2);

    Ok(())
}
