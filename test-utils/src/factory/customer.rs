//! Customer factory for creating test customer entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::customer::CustomerFactory;
///
/// let customer = CustomerFactory::new(&db)
///     .email("buyer@example.com")
///     .oauth("google")
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    uid: String,
    email: String,
    password_hash: Option<String>,
    first_name: String,
    last_name: Option<String>,
    is_oauth: bool,
    oauth_provider: Option<String>,
    email_verified: bool,
    deleted_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - uid: `"cust{id}"` where id is auto-incremented
    /// - email: `"customer_{id}@example.com"`
    /// - password_hash: a fixed placeholder, not a valid argon2 hash
    /// - first_name: `"Customer {id}"`
    /// - local account, email not verified, not deleted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            uid: format!("cust{}", id),
            email: format!("customer_{}@example.com", id),
            password_hash: Some("not-a-real-hash".to_string()),
            first_name: format!("Customer {}", id),
            last_name: None,
            is_oauth: false,
            oauth_provider: None,
            email_verified: false,
            deleted_at: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: Option<String>) -> Self {
        self.password_hash = password_hash;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Marks the account as created through the given OAuth provider.
    ///
    /// Clears the password hash and sets the email as verified, matching how
    /// OAuth accounts are created in production.
    pub fn oauth(mut self, provider: impl Into<String>) -> Self {
        self.is_oauth = true;
        self.oauth_provider = Some(provider.into());
        self.password_hash = None;
        self.email_verified = true;
        self
    }

    /// Marks the account as soft deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            uid: ActiveValue::Set(self.uid),
            username: ActiveValue::Set(None),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            is_oauth: ActiveValue::Set(self.is_oauth),
            oauth_provider: ActiveValue::Set(self.oauth_provider),
            email_verified: ActiveValue::Set(self.email_verified),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}

/// Creates a customer with a specific email.
pub async fn create_customer_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).email(email).build().await
}
