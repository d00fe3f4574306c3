use super::*;

/// Tests soft deleting a customer account.
///
/// Verifies that the deletion stamp hides the customer from both id and
/// email lookups while the row itself survives.
///
/// Expected: Ok(true) then no customer found by id or email
#[tokio::test]
async fn hides_customer_from_lookups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer_with_email(db, "gone@example.com").await?;

    let repo = CustomerRepository::new(db);
    let deleted = repo.soft_delete(customer.id).await?;
    assert!(deleted);

    assert!(repo.get_by_id(customer.id).await?.is_none());
    assert!(repo.find_by_email("gone@example.com").await?.is_none());

    Ok(())
}

/// Tests soft deleting an already deleted customer.
///
/// Verifies that a second deletion finds no live row to stamp.
///
/// Expected: Ok(false) on the second call
#[tokio::test]
async fn second_delete_finds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    assert!(repo.soft_delete(customer.id).await?);
    assert!(!repo.soft_delete(customer.id).await?);

    Ok(())
}
