//! Port for product listing persistence.
//!
//! Adapters store listings keyed by [`ProductId`]. Status changes go through
//! [`ProductRepository::save_if_status`] so two concurrent buyers cannot both
//! move the same listing out of `AVAILABLE`.

use async_trait::async_trait;

use crate::domain::{Product, ProductId, ProductSearchCriteria, ProductStatus};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
        /// The stored listing no longer has the status the caller read.
        StatusConflict { expected: ProductStatus, actual: ProductStatus } =>
            "product status changed: expected {expected}, found {actual}",
        /// A conditional write targeted a listing that is not stored.
        Missing { product_id: String } =>
            "product {product_id} is not stored",
    }
}

/// Port for listing storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch a listing by identifier.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Return every listing satisfying `criteria`, newest first.
    async fn find_by_criteria(
        &self,
        criteria: &ProductSearchCriteria,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Insert or replace a listing unconditionally.
    async fn save(&self, product: &Product) -> Result<(), ProductRepositoryError>;

    /// Replace a listing only while its stored status equals `expected`.
    ///
    /// Returns [`ProductRepositoryError::StatusConflict`] when another writer
    /// changed the status first, and [`ProductRepositoryError::Missing`] when
    /// the listing is not stored at all.
    async fn save_if_status(
        &self,
        product: &Product,
        expected: ProductStatus,
    ) -> Result<(), ProductRepositoryError>;

    /// Remove a listing, returning whether it existed.
    async fn delete(&self, id: &ProductId) -> Result<bool, ProductRepositoryError>;
}
