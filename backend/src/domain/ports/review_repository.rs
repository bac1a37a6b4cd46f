//! Port for review persistence.

use async_trait::async_trait;

use crate::domain::{ProductId, Review, ReviewId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by review repository adapters.
    pub enum ReviewRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "review repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "review repository query failed: {message}",
    }
}

/// Port for review storage and retrieval. Reviews are append-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fetch a review by identifier.
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError>;

    /// All reviews for one product, most recent first.
    async fn find_by_product_id(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<Review>, ReviewRepositoryError>;

    /// At most `limit` reviews across all products, most recent first.
    async fn find_recent(&self, limit: usize) -> Result<Vec<Review>, ReviewRepositoryError>;

    /// Store a review.
    async fn save(&self, review: &Review) -> Result<(), ReviewRepositoryError>;
}
