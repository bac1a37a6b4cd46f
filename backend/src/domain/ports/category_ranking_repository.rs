//! Port for the category ranking projection.

use async_trait::async_trait;

use crate::domain::CategoryRanking;

use super::define_port_error;

define_port_error! {
    /// Errors raised by category ranking adapters.
    pub enum CategoryRankingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category ranking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "category ranking repository query failed: {message}",
    }
}

/// Read model of category sales positions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRankingRepository: Send + Sync {
    /// The best `limit` categories ordered by rank.
    async fn top_categories(
        &self,
        limit: usize,
    ) -> Result<Vec<CategoryRanking>, CategoryRankingRepositoryError>;

    /// Replace the whole projection.
    async fn replace_all(
        &self,
        rankings: Vec<CategoryRanking>,
    ) -> Result<(), CategoryRankingRepositoryError>;
}
