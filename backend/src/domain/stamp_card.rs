//! Loyalty stamp cards.
//!
//! Every purchase credits the buyer one stamp. Ten stamps redeem one reward.
//! Redeeming subtracts the threshold rather than clearing the card, so surplus
//! stamps carry over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{StampCardId, UserId};

/// Stamps needed to redeem one reward.
pub const STAMPS_FOR_REWARD: u32 = 10;

/// Rule violations raised by stamp card mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StampCardError {
    #[error("not enough stamps to redeem a reward: have {stamps}, need {required}")]
    InsufficientStamps { stamps: u32, required: u32 },
}

/// A user's stamp card.
///
/// `revision` starts at 1 and increases by one on every mutation so stores
/// can reject stale writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampCard {
    id: StampCardId,
    user_id: UserId,
    stamps: u32,
    total_purchases: u32,
    last_purchase_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    revision: u32,
}

impl StampCard {
    /// Empty card for a user who has not purchased anything yet.
    pub fn new(id: StampCardId, user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            stamps: 0,
            total_purchases: 0,
            last_purchase_date: None,
            created_at: now,
            updated_at: now,
            revision: 1,
        }
    }

    pub fn id(&self) -> &StampCardId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn stamps(&self) -> u32 {
        self.stamps
    }

    pub fn total_purchases(&self) -> u32 {
        self.total_purchases
    }

    pub fn last_purchase_date(&self) -> Option<DateTime<Utc>> {
        self.last_purchase_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Whether at least one reward can be redeemed.
    pub fn can_get_reward(&self) -> bool {
        self.stamps >= STAMPS_FOR_REWARD
    }

    /// Stamps still missing before the next reward; zero once redeemable.
    pub fn stamps_until_reward(&self) -> u32 {
        STAMPS_FOR_REWARD.saturating_sub(self.stamps)
    }

    /// Number of whole rewards the current stamps would redeem.
    pub fn reward_count(&self) -> u32 {
        self.stamps / STAMPS_FOR_REWARD
    }

    /// Credit one purchase.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use freemarket::domain::{StampCard, StampCardId, UserId};
    ///
    /// let mut card = StampCard::new(StampCardId::random(), UserId::new("user1").unwrap(), Utc::now());
    /// card.add_stamp(Utc::now());
    /// assert_eq!(card.stamps(), 1);
    /// assert_eq!(card.stamps_until_reward(), 9);
    /// ```
    pub fn add_stamp(&mut self, now: DateTime<Utc>) {
        self.stamps = self.stamps.saturating_add(1);
        self.total_purchases = self.total_purchases.saturating_add(1);
        self.last_purchase_date = Some(now);
        self.touch(now);
    }

    /// Redeem one reward, consuming [`STAMPS_FOR_REWARD`] stamps.
    pub fn use_reward(&mut self, now: DateTime<Utc>) -> Result<(), StampCardError> {
        if !self.can_get_reward() {
            return Err(StampCardError::InsufficientStamps {
                stamps: self.stamps,
                required: STAMPS_FOR_REWARD,
            });
        }
        self.stamps -= STAMPS_FOR_REWARD;
        self.touch(now);
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.revision = self.revision.saturating_add(1);
    }
}
