//! Driving port for browsing listings.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId, ProductSearchCriteria};

/// Read-side use cases for product listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Listings matching every supplied filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an invalid request error when `minPrice` exceeds `maxPrice`.
    async fn search(&self, criteria: ProductSearchCriteria) -> Result<Vec<Product>, Error>;

    /// A single listing, or a not found error.
    async fn get(&self, product_id: &ProductId) -> Result<Product, Error>;
}
