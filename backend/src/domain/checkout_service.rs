//! Purchase saga.
//!
//! A purchase runs two steps: the listing moves to `SOLD`, then the buyer is
//! credited one stamp. A sold listing is never rolled back. When the stamp
//! step fails the failure is logged at error level for follow-up and the
//! outcome reports that no stamp was awarded.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{CheckoutCommand, ProductCommand, PurchaseOutcome, StampCardCommand};
use crate::domain::{Error, ProductId, UserId};

/// Coordinates the product and stamp card commands for a purchase.
#[derive(Clone)]
pub struct CheckoutService {
    products: Arc<dyn ProductCommand>,
    stamp_cards: Arc<dyn StampCardCommand>,
}

impl CheckoutService {
    pub fn new(
        products: Arc<dyn ProductCommand>,
        stamp_cards: Arc<dyn StampCardCommand>,
    ) -> Self {
        Self {
            products,
            stamp_cards,
        }
    }
}

#[async_trait]
impl CheckoutCommand for CheckoutService {
    async fn purchase(
        &self,
        product_id: &ProductId,
        buyer_id: &UserId,
    ) -> Result<PurchaseOutcome, Error> {
        let product = self.products.purchase(product_id, buyer_id).await?;

        let stamp_awarded = match self.stamp_cards.add_stamp(buyer_id).await {
            Ok(card) => {
                info!(
                    product_id = %product_id,
                    buyer_id = %buyer_id,
                    stamps = card.stamps(),
                    "purchase completed"
                );
                true
            }
            Err(err) => {
                error!(
                    product_id = %product_id,
                    buyer_id = %buyer_id,
                    error = %err,
                    "stamp accrual failed after purchase; listing stays sold"
                );
                false
            }
        };

        Ok(PurchaseOutcome {
            product,
            stamp_awarded,
        })
    }
}
