//! Driving port for reading stamp cards.

use async_trait::async_trait;

use crate::domain::{Error, StampCard, UserId};

/// Read-side stamp card use case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StampCardQuery: Send + Sync {
    /// The user's card, creating an empty one on first access.
    async fn get(&self, user_id: &UserId) -> Result<StampCard, Error>;
}
