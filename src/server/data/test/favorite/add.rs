use super::*;

/// Tests favoriting a listing twice.
///
/// Verifies that the first call inserts the favorite and the second call
/// returns the same row without creating a duplicate.
///
/// Expected: Ok with created true then false, same favorite id
#[tokio::test]
async fn is_idempotent_per_customer_and_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, _, listing) = factory::helpers::create_listing_with_dependencies(db).await?;
    let customer = factory::customer::create_customer(db).await?;

    let repo = FavoriteRepository::new(db);
    let (first, created) = repo.add(customer.id, listing.id).await?;
    assert!(created);

    let (second, created_again) = repo.add(customer.id, listing.id).await?;
    assert!(!created_again);
    assert_eq!(second.id, first.id);

    let favorites = repo.get_by_customer(customer.id).await?;
    assert_eq!(favorites.len(), 1);

    Ok(())
}
