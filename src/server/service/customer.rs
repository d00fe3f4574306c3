//! Customer service for account management and favorites.

use sea_orm::DatabaseConnection;

use crate::{
    model::customer::{CustomerDto, RegisterCustomerDto, UpdateCustomerDto},
    server::{
        data::{
            customer::CustomerRepository, favorite::FavoriteRepository,
            listing::ListingRepository,
        },
        error::AppError,
        model::customer::{Customer, RegisterCustomerParams, UpdateCustomerParams},
        service::auth::hash_password,
        util::uid::short_uid,
    },
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a local customer account.
    ///
    /// Hashes the password, generates the short public uid, and rejects
    /// duplicate emails before inserting.
    ///
    /// # Returns
    /// - `Ok(CustomerDto)` - The created account's public profile
    /// - `Err(AppError::BadRequest)` - The email is already registered
    pub async fn register(&self, dto: RegisterCustomerDto) -> Result<CustomerDto, AppError> {
        let repo = CustomerRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&dto.password)?;
        let params = RegisterCustomerParams::from_dto(dto, short_uid(), password_hash);

        let customer = repo.create(params).await?;

        Ok(Customer::from_entity(customer).into_dto())
    }

    /// Gets a customer's own profile.
    pub async fn get_profile(&self, customer_id: i32) -> Result<CustomerDto, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo
            .get_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(Customer::from_entity(customer).into_dto())
    }

    /// Updates a customer's own profile fields.
    pub async fn update_profile(
        &self,
        customer_id: i32,
        dto: UpdateCustomerDto,
    ) -> Result<CustomerDto, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo
            .update_profile(customer_id, UpdateCustomerParams::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(Customer::from_entity(customer).into_dto())
    }

    /// Soft deletes a customer's own account.
    pub async fn delete_account(&self, customer_id: i32) -> Result<(), AppError> {
        let repo = CustomerRepository::new(self.db);

        if !repo.soft_delete(customer_id).await? {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        Ok(())
    }

    /// Favorites a listing and bumps its denormalized counter.
    ///
    /// Idempotent: favoriting twice leaves the counter unchanged.
    pub async fn add_favorite(&self, customer_id: i32, listing_id: i32) -> Result<(), AppError> {
        let listing_repo = ListingRepository::new(self.db);

        listing_repo
            .get_by_id(listing_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

        let (_, created) = FavoriteRepository::new(self.db)
            .add(customer_id, listing_id)
            .await?;

        if created {
            listing_repo.adjust_favorite_count(listing_id, 1).await?;
        }

        Ok(())
    }

    /// Removes a favorite and decrements the denormalized counter.
    pub async fn remove_favorite(&self, customer_id: i32, listing_id: i32) -> Result<(), AppError> {
        let removed = FavoriteRepository::new(self.db)
            .remove(customer_id, listing_id)
            .await?;

        if removed {
            ListingRepository::new(self.db)
                .adjust_favorite_count(listing_id, -1)
                .await?;
        }

        Ok(())
    }
}
