use super::*;

/// Tests fetching a single page of brands.
///
/// Verifies that the requested slice comes back while the total still
/// counts every brand.
///
/// Expected: Ok with two rows and a total of five
#[tokio::test]
async fn returns_requested_page_with_full_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::brand::create_brand(db).await?;
    }

    let repo = BrandRepository::new(db);
    let slice = PageSlice::new(Some(2), Some(2)).unwrap();
    let (brands, total) = repo.get_paginated(slice).await?;

    assert_eq!(brands.len(), 2);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests fetching brands without pagination.
///
/// Verifies that an unbounded slice returns every brand.
///
/// Expected: Ok with all brands and a matching total
#[tokio::test]
async fn unbounded_slice_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Brand)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::brand::create_brand(db).await?;
    }

    let repo = BrandRepository::new(db);
    let (brands, total) = repo.get_paginated(PageSlice::unbounded()).await?;

    assert_eq!(brands.len(), 3);
    assert_eq!(total, 3);

    Ok(())
}
