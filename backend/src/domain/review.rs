//! Buyer reviews of completed purchases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ProductId, ReviewId, UserId};

/// Lowest accepted star rating.
pub const RATING_MIN: u8 = 1;
/// Highest accepted star rating.
pub const RATING_MAX: u8 = 5;

/// Validation failures raised while building a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReviewValidationError {
    #[error("rating must be between {RATING_MIN} and {RATING_MAX} (got {value})")]
    RatingOutOfRange { value: i64 },
}

/// Star rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Validate a raw rating.
    ///
    /// # Examples
    /// ```
    /// use freemarket::domain::Rating;
    ///
    /// assert!(Rating::new(5).is_ok());
    /// assert!(Rating::new(6).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ReviewValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (RATING_MIN..=RATING_MAX).contains(rating))
            .map(Self)
            .ok_or(ReviewValidationError::RatingOutOfRange { value })
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ReviewValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Fields submitted by the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub product_id: ProductId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    pub rating: Rating,
    pub comment: String,
    pub product_title: String,
    pub buyer_name: String,
}

/// Immutable review record.
///
/// Product title and buyer name are copied at creation so the timeline can be
/// rendered without further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub buyer_id: UserId,
    pub seller_id: UserId,
    pub rating: Rating,
    pub comment: String,
    pub product_title: String,
    pub buyer_name: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(id: ReviewId, draft: ReviewDraft, now: DateTime<Utc>) -> Self {
        let ReviewDraft {
            product_id,
            buyer_id,
            seller_id,
            rating,
            comment,
            product_title,
            buyer_name,
        } = draft;
        Self {
            id,
            product_id,
            buyer_id,
            seller_id,
            rating,
            comment,
            product_title,
            buyer_name,
            created_at: now,
        }
    }
}

/// Order reviews most recent first, breaking ties by identifier.
pub fn sort_most_recent_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
