use super::*;

/// Tests storing a review and listing it back.
///
/// Verifies that the stored row carries the submitted rating and comment and
/// that listing by customer returns it.
///
/// Expected: Ok with the stored review
#[tokio::test]
async fn stores_rating_and_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(entity::prelude::Customer)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let customer = factory::customer::create_customer(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            customer_id: customer.id,
            car_id: car.id,
            rating: 4,
            comment: Some("Solid family car".to_string()),
        })
        .await?;

    assert_eq!(review.rating, 4);
    assert_eq!(review.comment.as_deref(), Some("Solid family car"));

    let reviews = repo.get_by_customer(customer.id).await?;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review.id);

    Ok(())
}

/// Tests that listing by customer excludes other customers' reviews.
///
/// Expected: Ok with only the requested customer's reviews
#[tokio::test]
async fn lists_only_the_requested_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(entity::prelude::Customer)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let reviewer = factory::customer::create_customer(db).await?;
    let other = factory::customer::create_customer(db).await?;

    factory::review::create_review(db, reviewer.id, car.id, 5).await?;
    factory::review::create_review(db, other.id, car.id, 2).await?;

    let reviews = ReviewRepository::new(db).get_by_customer(reviewer.id).await?;

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].customer_id, reviewer.id);
    assert_eq!(reviews[0].rating, 5);

    Ok(())
}

/// Tests that an out-of-range rating is rejected before any insert.
///
/// Expected: Err(AppError::BadRequest) for ratings 0 and 6
#[tokio::test]
async fn rejects_out_of_range_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(entity::prelude::Customer)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, car) = factory::helpers::create_car_with_dependencies(db).await?;
    let customer = factory::customer::create_customer(db).await?;

    let service = ReviewService::new(db);
    for rating in [0, 6] {
        let result = service
            .create(
                customer.id,
                crate::model::review::CreateReviewDto {
                    car_id: car.id,
                    rating,
                    comment: None,
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
