use super::*;

/// Tests removing a favorite.
///
/// Verifies that the first removal deletes the row and the second finds
/// nothing left to delete.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn reports_whether_the_favorite_existed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, _, listing) = factory::helpers::create_listing_with_dependencies(db).await?;
    let customer = factory::customer::create_customer(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.add(customer.id, listing.id).await?;

    assert!(repo.remove(customer.id, listing.id).await?);
    assert!(!repo.remove(customer.id, listing.id).await?);
    assert!(repo.find(customer.id, listing.id).await?.is_none());

    Ok(())
}
