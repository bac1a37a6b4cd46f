//! Driving port for reading reviews.

use async_trait::async_trait;

use crate::domain::{Error, ProductId, Review};

/// Default number of reviews shown on the timeline.
pub const DEFAULT_TIMELINE_LIMIT: usize = 10;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Up to `limit` reviews across the marketplace, most recent first.
    async fn timeline(&self, limit: usize) -> Result<Vec<Review>, Error>;

    /// Every review of one product, most recent first.
    async fn list_for_product(&self, product_id: &ProductId) -> Result<Vec<Review>, Error>;
}
