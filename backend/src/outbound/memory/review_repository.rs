//! In-memory review store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::domain::ports::{ReviewRepository, ReviewRepositoryError};
use crate::domain::{ProductId, Review, ReviewId, sort_most_recent_first};

#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
}

impl InMemoryReviewRepository {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ReviewId, Review>>, ReviewRepositoryError> {
        self.reviews
            .read()
            .map_err(|_| ReviewRepositoryError::query("review store lock poisoned"))
    }

    fn collect_sorted<F>(&self, keep: F) -> Result<Vec<Review>, ReviewRepositoryError>
    where
        F: Fn(&Review) -> bool,
    {
        let mut reviews: Vec<Review> = self
            .read()?
            .values()
            .filter(|review| keep(review))
            .cloned()
            .collect();
        sort_most_recent_first(&mut reviews);
        Ok(reviews)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewRepositoryError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_product_id(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<Review>, ReviewRepositoryError> {
        self.collect_sorted(|review| &review.product_id == product_id)
    }

    async fn find_recent(&self, limit: usize) -> Result<Vec<Review>, ReviewRepositoryError> {
        let mut reviews = self.collect_sorted(|_| true)?;
        reviews.truncate(limit);
        Ok(reviews)
    }

    async fn save(&self, review: &Review) -> Result<(), ReviewRepositoryError> {
        self.reviews
            .write()
            .map_err(|_| ReviewRepositoryError::query("review store lock poisoned"))?
            .insert(review.id.clone(), review.clone());
        Ok(())
    }
}
