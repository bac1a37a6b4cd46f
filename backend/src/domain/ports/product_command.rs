//! Driving port for listing and selling products.

use async_trait::async_trait;

use crate::domain::{CategoryId, Error, Product, ProductCondition, ProductId, UserId};

/// Request to list a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    /// Whole yen; negative values are rejected.
    pub price: i64,
    pub condition: ProductCondition,
    pub seller_id: UserId,
    pub category_id: CategoryId,
    pub images: Vec<String>,
}

/// Write-side use cases for product listings.
///
/// `purchase` and `reserve` check, in order: the listing exists (not found),
/// it is still available (conflict), and the caller is not its seller
/// (forbidden).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Validate and store a new `AVAILABLE` listing.
    async fn create(&self, request: CreateProductRequest) -> Result<Product, Error>;

    /// Mark the listing `SOLD` to `buyer_id`.
    async fn purchase(&self, product_id: &ProductId, buyer_id: &UserId) -> Result<Product, Error>;

    /// Mark the listing `RESERVED` for `user_id`.
    async fn reserve(&self, product_id: &ProductId, user_id: &UserId) -> Result<Product, Error>;
}
