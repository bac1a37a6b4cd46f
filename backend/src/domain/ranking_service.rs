//! Category ranking query service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CategoryRankingRepository, CategoryRankingRepositoryError, RankingQuery,
};
use crate::domain::{CategoryRanking, Error};

/// Serves the category ranking projection.
#[derive(Clone)]
pub struct RankingService<R> {
    ranking_repo: Arc<R>,
}

impl<R> RankingService<R> {
    pub fn new(ranking_repo: Arc<R>) -> Self {
        Self { ranking_repo }
    }
}

#[async_trait]
impl<R> RankingQuery for RankingService<R>
where
    R: CategoryRankingRepository,
{
    async fn top_categories(&self, limit: usize) -> Result<Vec<CategoryRanking>, Error> {
        self.ranking_repo
            .top_categories(limit)
            .await
            .map_err(|err| match err {
                CategoryRankingRepositoryError::Connection { message } => {
                    Error::service_unavailable(format!(
                        "category ranking repository unavailable: {message}"
                    ))
                }
                CategoryRankingRepositoryError::Query { message } => {
                    Error::internal(format!("category ranking repository error: {message}"))
                }
            })
    }
}
