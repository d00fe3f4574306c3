//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto};

/// A customer's rating of a catalog car.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub customer_id: i32,
    pub car_id: i32,
    /// Rating from 1 to 5, validated at the service boundary.
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            customer_id: entity.customer_id,
            car_id: entity.car_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            customer_id: self.customer_id,
            car_id: self.car_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    /// ID of the reviewing customer, taken from the session.
    pub customer_id: i32,
    /// ID of the reviewed catalog car.
    pub car_id: i32,
    /// Rating from 1 to 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl CreateReviewParams {
    /// Combines the review DTO with the session's customer id.
    pub fn from_dto(dto: CreateReviewDto, customer_id: i32) -> Self {
        Self {
            customer_id,
            car_id: dto.car_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
