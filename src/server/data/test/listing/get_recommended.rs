use super::*;

/// Tests the recommendation ordering.
///
/// Verifies that listings come back ordered by view count, highest first,
/// and that the amount cap is honored.
///
/// Expected: Ok with most viewed listings in order
#[tokio::test]
async fn orders_by_view_count_and_caps_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car, vendor, _quiet) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    let popular = factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .view_count(40)
        .build()
        .await?;
    let middling = factory::listing::ListingFactory::new(db, car.id, vendor.id)
        .view_count(7)
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let rows = repo.get_recommended(2).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, popular.id);
    assert_eq!(rows[1].id, middling.id);

    Ok(())
}
