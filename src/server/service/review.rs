//! Review service for customer ratings of catalog cars.

use sea_orm::DatabaseConnection;

use crate::{
    model::review::{CreateReviewDto, ReviewAverageDto, ReviewDto},
    server::{
        data::{car::CarRepository, review::ReviewRepository},
        error::AppError,
        model::review::{CreateReviewParams, Review},
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a customer's review of a catalog car.
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - The stored review
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5
    /// - `Err(AppError::NotFound)` - The reviewed car does not exist
    pub async fn create(
        &self,
        customer_id: i32,
        dto: CreateReviewDto,
    ) -> Result<ReviewDto, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        CarRepository::new(self.db)
            .get_by_id(dto.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        let review = ReviewRepository::new(self.db)
            .create(CreateReviewParams::from_dto(dto, customer_id))
            .await?;

        Ok(Review::from_entity(review).into_dto())
    }

    /// Lists a customer's reviews, most recent first.
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<ReviewDto>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?;

        Ok(reviews
            .into_iter()
            .map(|review| Review::from_entity(review).into_dto())
            .collect())
    }

    /// Computes a customer's mean rating.
    ///
    /// A customer without reviews averages to zero rather than erroring, so
    /// profile pages can always render the figure.
    pub async fn get_average_rating(&self, customer_id: i32) -> Result<ReviewAverageDto, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?;

        if reviews.is_empty() {
            return Ok(ReviewAverageDto {
                average: 0.0,
                review_count: 0,
            });
        }

        let total: i32 = reviews.iter().map(|review| review.rating).sum();

        Ok(ReviewAverageDto {
            average: f64::from(total) / reviews.len() as f64,
            review_count: reviews.len() as u64,
        })
    }
}
