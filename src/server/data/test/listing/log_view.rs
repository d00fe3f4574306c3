use super::*;

/// Tests recording an attributed view.
///
/// Verifies that a view by a logged-in customer inserts an audit row carrying
/// the customer id and bumps the listing's view counter.
///
/// Expected: Ok with audit row and view_count = 1
#[tokio::test]
async fn records_attributed_view() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, _, listing) =
        factory::helpers::create_listing_with_dependencies(db).await?;
    let customer = factory::customer::create_customer(db).await?;

    let repo = ListingRepository::new(db);
    repo.log_view(listing.id, Some(customer.id)).await?;

    let views = entity::prelude::ListingView::find()
        .filter(entity::listing_view::Column::ListingId.eq(listing.id))
        .all(db)
        .await?;
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].customer_id, Some(customer.id));

    let refreshed = entity::prelude::Listing::find_by_id(listing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(refreshed.view_count, 1);

    Ok(())
}

/// Tests recording an anonymous view.
///
/// Guests browse without a session, so the audit row carries no customer id
/// but the counter still moves.
///
/// Expected: Ok with anonymous audit row and view_count incremented
#[tokio::test]
async fn records_guest_view_without_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, _, listing) =
        factory::helpers::create_listing_with_dependencies(db).await?;

    let repo = ListingRepository::new(db);
    repo.log_view(listing.id, None).await?;
    repo.log_view(listing.id, None).await?;

    let views = entity::prelude::ListingView::find()
        .filter(entity::listing_view::Column::ListingId.eq(listing.id))
        .all(db)
        .await?;
    assert_eq!(views.len(), 2);
    assert!(views.iter().all(|v| v.customer_id.is_none()));

    let refreshed = entity::prelude::Listing::find_by_id(listing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(refreshed.view_count, 2);

    Ok(())
}
