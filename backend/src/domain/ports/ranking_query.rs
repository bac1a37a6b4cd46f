//! Driving port for category rankings.

use async_trait::async_trait;

use crate::domain::{CategoryRanking, Error};

/// Default number of categories shown in the ranking.
pub const DEFAULT_RANKING_LIMIT: usize = 5;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RankingQuery: Send + Sync {
    /// The best `limit` categories ordered by rank.
    async fn top_categories(&self, limit: usize) -> Result<Vec<CategoryRanking>, Error>;
}
