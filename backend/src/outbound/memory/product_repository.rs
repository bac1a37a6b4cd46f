//! In-memory listing store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductId, ProductSearchCriteria, ProductStatus, sort_newest_first};

/// Listings keyed by identifier behind a process-local lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ProductId, Product>>, ProductRepositoryError> {
        self.products
            .read()
            .map_err(|_| ProductRepositoryError::query("product store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<ProductId, Product>>, ProductRepositoryError> {
        self.products
            .write()
            .map_err(|_| ProductRepositoryError::query("product store lock poisoned"))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_criteria(
        &self,
        criteria: &ProductSearchCriteria,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut matches: Vec<Product> = self
            .read()?
            .values()
            .filter(|product| criteria.matches(product))
            .cloned()
            .collect();
        sort_newest_first(&mut matches);
        Ok(matches)
    }

    async fn save(&self, product: &Product) -> Result<(), ProductRepositoryError> {
        self.write()?.insert(product.id().clone(), product.clone());
        Ok(())
    }

    async fn save_if_status(
        &self,
        product: &Product,
        expected: ProductStatus,
    ) -> Result<(), ProductRepositoryError> {
        let mut products = self.write()?;
        let stored = products
            .get_mut(product.id())
            .ok_or_else(|| ProductRepositoryError::missing(product.id().as_str()))?;
        if stored.status() != expected {
            return Err(ProductRepositoryError::status_conflict(
                expected,
                stored.status(),
            ));
        }
        *stored = product.clone();
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, ProductRepositoryError> {
        Ok(self.write()?.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ProductCondition;
    use crate::domain::test_fixtures::{fixture_timestamp, listing, product_id, user};
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryProductRepository {
        InMemoryProductRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn save_then_find_returns_listing(repo: InMemoryProductRepository) {
        repo.save(&listing("1", "user1")).await.expect("save");

        let found = repo.find_by_id(&product_id("1")).await.expect("lookup");
        assert_eq!(found.map(|p| p.id().clone()), Some(product_id("1")));
        assert!(
            repo.find_by_id(&product_id("2"))
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_criteria_returns_everything(repo: InMemoryProductRepository) {
        for id in ["1", "2", "3"] {
            repo.save(&listing(id, "user1")).await.expect("save");
        }

        let all = repo
            .find_by_criteria(&ProductSearchCriteria::default())
            .await
            .expect("search");
        assert_eq!(all.len(), 3);

        let none = repo
            .find_by_criteria(&ProductSearchCriteria {
                keyword: Some("nonexistent-xyz".to_owned()),
                ..ProductSearchCriteria::default()
            })
            .await
            .expect("search");
        assert!(none.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn criteria_filter_by_seller_and_condition(repo: InMemoryProductRepository) {
        repo.save(&listing("1", "user1")).await.expect("save");
        repo.save(&listing("2", "user2")).await.expect("save");

        let results = repo
            .find_by_criteria(&ProductSearchCriteria {
                seller_id: Some(user("user2")),
                condition: Some(ProductCondition::Good),
                ..ProductSearchCriteria::default()
            })
            .await
            .expect("search");
        let ids: Vec<_> = results.iter().map(|p| p.id().as_str().to_owned()).collect();
        assert_eq!(ids, vec!["2".to_owned()]);
    }

    #[rstest]
    #[tokio::test]
    async fn save_if_status_rejects_stale_status(repo: InMemoryProductRepository) {
        let original = listing("1", "user1");
        repo.save(&original).await.expect("save");

        let mut first = original.clone();
        first.mark_as_sold(fixture_timestamp()).expect("sell");
        repo.save_if_status(&first, ProductStatus::Available)
            .await
            .expect("first buyer wins");

        let mut second = original;
        second.reserve(fixture_timestamp()).expect("reserve");
        let err = repo
            .save_if_status(&second, ProductStatus::Available)
            .await
            .expect_err("second writer loses");
        assert_eq!(
            err,
            ProductRepositoryError::status_conflict(ProductStatus::Available, ProductStatus::Sold)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn save_if_status_requires_stored_listing(repo: InMemoryProductRepository) {
        let err = repo
            .save_if_status(&listing("9", "user1"), ProductStatus::Available)
            .await
            .expect_err("not stored");
        assert!(matches!(err, ProductRepositoryError::Missing { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_listing_existed(repo: InMemoryProductRepository) {
        repo.save(&listing("1", "user1")).await.expect("save");
        assert!(repo.delete(&product_id("1")).await.expect("delete"));
        assert!(!repo.delete(&product_id("1")).await.expect("delete"));
    }
}
