use super::*;

/// Tests a logged-in customer passing the guard.
///
/// Verifies that a session holding a live customer id resolves to that
/// customer's database row.
///
/// Expected: Ok(Model) matching the created customer
#[tokio::test]
async fn grants_access_to_logged_in_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::customer::create_customer(db).await?;
    CustomerSession::new(session)
        .set_customer_id(customer.id)
        .await?;

    let guard = CustomerGuard::new(db, session);
    let resolved = guard.require().await?;

    assert_eq!(resolved.id, customer.id);
    assert_eq!(resolved.email, customer.email);

    Ok(())
}

/// Tests the guard with no customer id in the session.
///
/// Verifies that an anonymous request is rejected before any database
/// lookup happens.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = CustomerGuard::new(db, session);
    let result = guard.require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests the guard when the session points at a deleted account.
///
/// Verifies that a soft-deleted customer is rejected even though their
/// session cookie is still valid.
///
/// Expected: Err(AuthError::AccountNotInDatabase)
#[tokio::test]
async fn rejects_deleted_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::customer::CustomerFactory::new(db).deleted().build().await?;
    CustomerSession::new(session)
        .set_customer_id(customer.id)
        .await?;

    let guard = CustomerGuard::new(db, session);
    let result = guard.require().await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountNotInDatabase(id))) => {
            assert_eq!(id, customer.id);
        }
        other => panic!("Expected AccountNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the optional guard for guest requests.
///
/// Verifies that an anonymous session yields None instead of an error, so
/// guest traffic still reaches the endpoint.
///
/// Expected: Ok(None) for guests, Ok(Some) once logged in
#[tokio::test]
async fn optional_passes_guests_through() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = CustomerGuard::new(db, session);
    assert!(guard.optional().await?.is_none());

    let customer = factory::customer::create_customer(db).await?;
    CustomerSession::new(session)
        .set_customer_id(customer.id)
        .await?;

    let resolved = guard.optional().await?;
    assert_eq!(resolved.map(|c| c.id), Some(customer.id));

    Ok(())
}
