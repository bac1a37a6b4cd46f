//! In-memory stamp card store keyed by owning user.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{StampCardRepository, StampCardRepositoryError};
use crate::domain::{StampCard, UserId};

#[derive(Debug, Clone, Default)]
pub struct InMemoryStampCardRepository {
    cards: Arc<RwLock<HashMap<UserId, StampCard>>>,
}

impl InMemoryStampCardRepository {
    fn read(
        &self,
    ) -> Result<RwLockReadGuard<'_, HashMap<UserId, StampCard>>, StampCardRepositoryError> {
        self.cards
            .read()
            .map_err(|_| StampCardRepositoryError::query("stamp card store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<UserId, StampCard>>, StampCardRepositoryError> {
        self.cards
            .write()
            .map_err(|_| StampCardRepositoryError::query("stamp card store lock poisoned"))
    }
}

#[async_trait]
impl StampCardRepository for InMemoryStampCardRepository {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StampCard>, StampCardRepositoryError> {
        Ok(self.read()?.get(user_id).cloned())
    }

    async fn find_or_create(
        &self,
        candidate: StampCard,
    ) -> Result<StampCard, StampCardRepositoryError> {
        let mut cards = self.write()?;
        let card = cards
            .entry(candidate.user_id().clone())
            .or_insert(candidate);
        Ok(card.clone())
    }

    async fn save(
        &self,
        card: &StampCard,
        expected_revision: u32,
    ) -> Result<(), StampCardRepositoryError> {
        let mut cards = self.write()?;
        let stored = cards
            .get_mut(card.user_id())
            .ok_or_else(|| StampCardRepositoryError::missing(card.user_id().as_str()))?;
        if stored.revision() != expected_revision {
            return Err(StampCardRepositoryError::revision_mismatch(
                expected_revision,
                stored.revision(),
            ));
        }
        *stored = card.clone();
        Ok(())
    }
}
