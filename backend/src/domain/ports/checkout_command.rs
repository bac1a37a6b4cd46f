//! Driving port for the purchase flow.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductId, UserId};

/// Result of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    /// The listing after it moved to `SOLD`.
    pub product: Product,
    /// Whether the buyer's loyalty stamp was credited.
    pub stamp_awarded: bool,
}

/// Buys a listing and credits the buyer's stamp card.
///
/// The sale is authoritative: once the listing is `SOLD` the call succeeds
/// even if crediting the stamp fails, reporting `stamp_awarded: false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutCommand: Send + Sync {
    async fn purchase(
        &self,
        product_id: &ProductId,
        buyer_id: &UserId,
    ) -> Result<PurchaseOutcome, Error>;
}
