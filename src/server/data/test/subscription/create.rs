use super::*;

/// Tests creating a package and listing it back.
///
/// Verifies the stored fields and that listing orders cheapest first.
///
/// Expected: Ok with both packages, cheaper one first
#[tokio::test]
async fn stores_package_and_lists_cheapest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPackage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriptionRepository::new(db);
    let premium = repo
        .create(CreateSubscriptionPackageParams {
            package_name: "Premium".to_string(),
            car_post_slot: 50,
            price: 4_990.0,
            duration_in_day: 90,
        })
        .await?;
    assert_eq!(premium.car_post_slot, 50);
    assert_eq!(premium.duration_in_day, 90);

    factory::subscription_package::create_subscription_package(db, "Starter", 990.0).await?;

    let packages = repo.get_all().await?;
    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0].package_name, "Starter");
    assert_eq!(packages[1].package_name, "Premium");

    Ok(())
}

/// Tests that negative plan figures are rejected before any insert.
///
/// Expected: Err(AppError::BadRequest) and no stored package
#[tokio::test]
async fn rejects_negative_figures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SubscriptionPackage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SubscriptionService::new(db);
    let result = service
        .create(crate::model::subscription::CreateSubscriptionPackageDto {
            package_name: "Broken".to_string(),
            car_post_slot: -1,
            price: 990.0,
            duration_in_day: 30,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
