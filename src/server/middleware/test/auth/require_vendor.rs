use super::*;

/// Tests a logged-in vendor user passing the guard.
///
/// Verifies that the resolved row carries the vendor id the handlers use
/// for ownership checks.
///
/// Expected: Ok(Model) with the user's vendor id
#[tokio::test]
async fn grants_access_to_logged_in_vendor_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Vendor)
        .with_table(entity::prelude::VendorUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let vendor = factory::vendor::create_vendor(db).await?;
    let user = factory::vendor_user::create_vendor_user(db, vendor.id).await?;
    VendorSession::new(session)
        .set_vendor_user_id(user.id)
        .await?;

    let guard = VendorGuard::new(db, session);
    let resolved = guard.require().await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.vendor_id, vendor.id);

    Ok(())
}

/// Tests the guard against an account straight out of registration.
///
/// Registration leaves the contact email unverified and no verification
/// flow exists, so the guard alone decides access to listing mutations.
///
/// Expected: Ok(Model) despite the unverified email
#[tokio::test]
async fn grants_access_to_freshly_registered_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Vendor)
        .with_table(entity::prelude::VendorUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let vendor = factory::vendor::create_vendor(db).await?;
    let user = VendorUserRepository::new(db)
        .create(RegisterVendorUserParams {
            vendor_id: vendor.id,
            username: "new_staff".to_string(),
            email: "staff@dealership.test".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        })
        .await?;
    assert!(!user.email_verified);

    VendorSession::new(session)
        .set_vendor_user_id(user.id)
        .await?;

    let resolved = VendorGuard::new(db, session).require().await?;
    assert_eq!(resolved.vendor_id, vendor.id);

    Ok(())
}

/// Tests the vendor guard with no session entry.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Vendor)
        .with_table(entity::prelude::VendorUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = VendorGuard::new(db, session);
    let result = guard.require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests the vendor guard when the stored id no longer resolves.
///
/// Expected: Err(AuthError::AccountNotInDatabase)
#[tokio::test]
async fn rejects_unknown_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Vendor)
        .with_table(entity::prelude::VendorUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    VendorSession::new(session).set_vendor_user_id(4040).await?;

    let guard = VendorGuard::new(db, session);
    let result = guard.require().await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountNotInDatabase(id))) => assert_eq!(id, 4040),
        other => panic!("Expected AccountNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}
