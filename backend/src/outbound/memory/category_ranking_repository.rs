//! In-memory category ranking projection.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{CategoryRankingRepository, CategoryRankingRepositoryError};
use crate::domain::{CategoryRanking, sort_by_rank};

/// Rankings kept sorted by rank on every replace.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRankingRepository {
    rankings: Arc<RwLock<Vec<CategoryRanking>>>,
}

#[async_trait]
impl CategoryRankingRepository for InMemoryCategoryRankingRepository {
    async fn top_categories(
        &self,
        limit: usize,
    ) -> Result<Vec<CategoryRanking>, CategoryRankingRepositoryError> {
        let rankings = self
            .rankings
            .read()
            .map_err(|_| CategoryRankingRepositoryError::query("ranking store lock poisoned"))?;
        Ok(rankings.iter().take(limit).cloned().collect())
    }

    async fn replace_all(
        &self,
        mut rankings: Vec<CategoryRanking>,
    ) -> Result<(), CategoryRankingRepositoryError> {
        sort_by_rank(&mut rankings);
        *self
            .rankings
            .write()
            .map_err(|_| CategoryRankingRepositoryError::query("ranking store lock poisoned"))? =
            rankings;
        Ok(())
    }
}
