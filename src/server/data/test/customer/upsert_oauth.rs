use super::*;

/// Tests the first OAuth callback for an unknown email.
///
/// Verifies that a fresh account is created with a verified email, the
/// provider recorded, and no password hash.
///
/// Expected: Ok with a new verified passwordless customer
#[tokio::test]
async fn creates_verified_account_without_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo
        .upsert_oauth(OauthCustomerParams {
            uid: "oauth-uid-1".to_string(),
            email: "new@example.com".to_string(),
            first_name: "Nina".to_string(),
            last_name: None,
            provider: "google".to_string(),
        })
        .await?;

    assert!(customer.is_oauth);
    assert!(customer.email_verified);
    assert_eq!(customer.oauth_provider.as_deref(), Some("google"));
    assert!(customer.password_hash.is_none());

    Ok(())
}

/// Tests an OAuth callback for an email that already has an account.
///
/// Verifies that the existing customer is returned unchanged instead of a
/// duplicate being inserted, even when the provider differs.
///
/// Expected: Ok with the original customer's id
#[tokio::test]
async fn returns_existing_account_for_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::customer::create_customer_with_email(db, "taken@example.com").await?;

    let repo = CustomerRepository::new(db);
    let resolved = repo
        .upsert_oauth(OauthCustomerParams {
            uid: "oauth-uid-2".to_string(),
            email: "taken@example.com".to_string(),
            first_name: "Nina".to_string(),
            last_name: None,
            provider: "facebook".to_string(),
        })
        .await?;

    assert_eq!(resolved.id, existing.id);
    assert_eq!(resolved.uid, existing.uid);

    Ok(())
}
