use super::*;

/// Tests the stats aggregation with nothing to aggregate.
///
/// Verifies that an empty result set is reported as `NoData` instead of
/// producing histograms with null bounds.
///
/// Expected: Err with QueryError::NoData
#[tokio::test]
async fn rejects_empty_result_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    let result = repo.get_price_stats(&ListingFilter::default()).await;

    assert!(matches!(
        result,
        Err(AppError::QueryErr(QueryError::NoData(_)))
    ));

    Ok(())
}

/// Tests the price histogram layout and counts.
///
/// Verifies that all four price classes come back in order, that the eco
/// class spans its fixed hundred buckets, and that each listing lands in
/// the buckets of the classes covering its price.
///
/// Expected: Ok with eco holding two listings and mid holding one
#[tokio::test]
async fn buckets_listings_by_price_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let vendor = factory::vendor::create_vendor(db).await?;
    for price in [100_000.0, 250_000.0, 1_200_000.0] {
        factory::listing::ListingFactory::new(db, car.id, vendor.id)
            .price(price)
            .build()
            .await?;
    }

    let repo = ListingRepository::new(db);
    let stats = repo
        .get_price_stats(&ListingFilter::default())
        .await
        .unwrap();

    assert_eq!(stats.dimension, "price");
    let names: Vec<&str> = stats.classes.iter().map(|c| c.class).collect();
    assert_eq!(names, vec!["eco", "mid", "high", "all"]);

    let eco = &stats.classes[0];
    assert_eq!(eco.bar_count, 100);
    assert_eq!(eco.bar_range, 10_000.0);
    assert_eq!(eco.bars.iter().sum::<u64>(), 2);

    let mid = &stats.classes[1];
    assert_eq!(mid.bars.iter().sum::<u64>(), 1);

    let high = &stats.classes[2];
    assert_eq!(high.bars.iter().sum::<u64>(), 0);

    let all = &stats.classes[3];
    assert_eq!(all.min_value, 100_000.0);
    assert_eq!(all.max_value, 1_200_000.0);
    assert_eq!(all.bars.iter().sum::<u64>(), 3);

    Ok(())
}

/// Tests a price spread straddling the eco/mid boundary.
///
/// Twelve listings from 500k to 1.49M in 90k steps put six below the one
/// million boundary and six above it.
///
/// Expected: Ok with six listings in eco and six in mid
#[tokio::test]
async fn splits_spread_across_eco_and_mid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let vendor = factory::vendor::create_vendor(db).await?;
    for i in 0..12 {
        factory::listing::ListingFactory::new(db, car.id, vendor.id)
            .price(500_000.0 + i as f64 * 90_000.0)
            .build()
            .await?;
    }

    let repo = ListingRepository::new(db);
    let stats = repo
        .get_price_stats(&ListingFilter::default())
        .await
        .unwrap();

    assert_eq!(stats.classes[0].bars.iter().sum::<u64>(), 6);
    assert_eq!(stats.classes[1].bars.iter().sum::<u64>(), 6);
    assert_eq!(stats.classes[3].bars.iter().sum::<u64>(), 12);

    Ok(())
}

/// Tests that the stats aggregation respects the listing filter.
///
/// Verifies that only listings matching the filter feed the histograms.
///
/// Expected: Ok with the other brand's listing excluded from every class
#[tokio::test]
async fn applies_filter_before_aggregating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let (_, _, _, other_car) = factory::helpers::create_car_with_dependencies(db).await?;
    let vendor = factory::vendor::create_vendor(db).await?;

    factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .price(400_000.0)
        .build()
        .await?;
    factory::listing::ListingFactory::new(db, other_car.id, vendor.id)
        .price(2_500_000.0)
        .build()
        .await?;

    let filter = ListingFilter {
        brand_ids: vec![brand.id],
        ..Default::default()
    };

    let repo = ListingRepository::new(db);
    let stats = repo.get_price_stats(&filter).await.unwrap();

    let all = &stats.classes[3];
    assert_eq!(all.bars.iter().sum::<u64>(), 1);
    assert_eq!(all.min_value, 400_000.0);
    assert_eq!(all.max_value, 400_000.0);

    Ok(())
}

/// Tests the mileage histogram's closed buckets.
///
/// Verifies that the low mileage class uses inclusive bucket bounds so a
/// value sitting exactly on a bucket's upper edge is counted once.
///
/// Expected: Ok with the listing counted in exactly one low bucket
#[tokio::test]
async fn mileage_buckets_close_on_their_upper_bound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let vendor = factory::vendor::create_vendor(db).await?;
    factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .mileage(5_000)
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let stats = repo
        .get_mileage_stats(&ListingFilter::default())
        .await
        .unwrap();

    assert_eq!(stats.dimension, "mileage");
    let low = &stats.classes[0];
    assert_eq!(low.class, "low");
    // [1, 5000] is the first closed bucket.
    assert_eq!(low.bars[0], 1);
    assert_eq!(low.bars.iter().sum::<u64>(), 1);

    Ok(())
}
