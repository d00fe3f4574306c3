use super::*;

/// Tests the mean rating over several reviews.
///
/// Three reviews rated 5, 4, and 3 average to 4.0.
///
/// Expected: Ok with average 4.0 and count 3
#[tokio::test]
async fn averages_across_the_customers_reviews() -> Result<(), AppError> {
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

    for rating in [5, 4, 3] {
        factory::review::create_review(db, customer.id, car.id, rating).await?;
    }

    let average = ReviewService::new(db).get_average_rating(customer.id).await?;

    assert_eq!(average.average, 4.0);
    assert_eq!(average.review_count, 3);

    Ok(())
}

/// Tests the mean rating of a customer without reviews.
///
/// Expected: Ok with average 0 and count 0
#[tokio::test]
async fn customer_without_reviews_averages_to_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_table(entity::prelude::Customer)
        .with_table(entity::prelude::Review)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let average = ReviewService::new(db).get_average_rating(customer.id).await?;

    assert_eq!(average.average, 0.0);
    assert_eq!(average.review_count, 0);

    Ok(())
}
