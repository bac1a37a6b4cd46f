//! Driving port for posting reviews.

use async_trait::async_trait;

use crate::domain::{Error, ProductId, Review, UserId};

/// Request to post a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReviewRequest {
    pub product_id: ProductId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    /// Raw star rating; must be within `1..=5`.
    pub rating: i64,
    pub comment: String,
    pub product_title: String,
    pub buyer_name: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Validate and store a review, returning it as stored.
    async fn create(&self, request: CreateReviewRequest) -> Result<Review, Error>;
}
