//! Driving port for stamp accrual and redemption.

use async_trait::async_trait;

use crate::domain::{Error, StampCard, UserId};

/// Write-side stamp card use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StampCardCommand: Send + Sync {
    /// Credit one purchase, creating the card when needed.
    async fn add_stamp(&self, user_id: &UserId) -> Result<StampCard, Error>;

    /// Redeem one reward.
    ///
    /// # Errors
    ///
    /// Not found when the user has no card; conflict when fewer than ten
    /// stamps are available.
    async fn use_reward(&self, user_id: &UserId) -> Result<StampCard, Error>;
}
