//! Review domain services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    CreateReviewRequest, ReviewCommand, ReviewQuery, ReviewRepository, ReviewRepositoryError,
};
use crate::domain::{
    Error, ProductId, Rating, Review, ReviewDraft, ReviewId, ReviewValidationError,
};

fn map_repository_error(error: ReviewRepositoryError) -> Error {
    match error {
        ReviewRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("review repository unavailable: {message}"))
        }
        ReviewRepositoryError::Query { message } => {
            Error::internal(format!("review repository error: {message}"))
        }
    }
}

fn map_validation_error(error: ReviewValidationError) -> Error {
    match error {
        ReviewValidationError::RatingOutOfRange { value } => {
            Error::invalid_request(error.to_string()).with_details(json!({
                "field": "rating",
                "value": value,
                "code": "invalid_rating",
            }))
        }
    }
}

/// Review service implementing the review driving ports.
#[derive(Clone)]
pub struct ReviewService<R> {
    review_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ReviewService<R> {
    pub fn new(review_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { review_repo, clock }
    }
}

#[async_trait]
impl<R> ReviewCommand for ReviewService<R>
where
    R: ReviewRepository,
{
    async fn create(&self, request: CreateReviewRequest) -> Result<Review, Error> {
        let CreateReviewRequest {
            product_id,
            buyer_id,
            seller_id,
            rating,
            comment,
            product_title,
            buyer_name,
        } = request;
        let rating = Rating::new(rating).map_err(map_validation_error)?;
        let review = Review::new(
            ReviewId::random(),
            ReviewDraft {
                product_id,
                buyer_id,
                seller_id,
                rating,
                comment,
                product_title,
                buyer_name,
            },
            self.clock.utc(),
        );

        self.review_repo
            .save(&review)
            .await
            .map_err(map_repository_error)?;

        info!(
            review_id = %review.id,
            product_id = %review.product_id,
            rating = review.rating.value(),
            "review posted"
        );
        Ok(review)
    }
}

#[async_trait]
impl<R> ReviewQuery for ReviewService<R>
where
    R: ReviewRepository,
{
    async fn timeline(&self, limit: usize) -> Result<Vec<Review>, Error> {
        self.review_repo
            .find_recent(limit)
            .await
            .map_err(map_repository_error)
    }

    async fn list_for_product(&self, product_id: &ProductId) -> Result<Vec<Review>, Error> {
        self.review_repo
            .find_by_product_id(product_id)
            .await
            .map_err(map_repository_error)
    }
}
