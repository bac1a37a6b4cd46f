//! Product listings and their sale lifecycle.
//!
//! A listing starts `AVAILABLE` and moves exactly once, to either `SOLD` or
//! `RESERVED`. Both are terminal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, Money, ProductId, UserId};

/// Physical condition declared by the seller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCondition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl ProductCondition {
    /// Wire representation of the condition.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::LikeNew => "LIKE_NEW",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        }
    }
}

impl fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown condition label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product condition: {0}")]
pub struct ParseProductConditionError(pub String);

impl FromStr for ProductCondition {
    type Err = ParseProductConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "LIKE_NEW" => Ok(Self::LikeNew),
            "GOOD" => Ok(Self::Good),
            "FAIR" => Ok(Self::Fair),
            "POOR" => Ok(Self::Poor),
            other => Err(ParseProductConditionError(other.to_owned())),
        }
    }
}

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Available,
    Sold,
    Reserved,
}

impl ProductStatus {
    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Sold => "SOLD",
            Self::Reserved => "RESERVED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised while building a listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("price must not be negative (got {amount})")]
    NegativePrice { amount: i64 },
}

/// Illegal status transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProductTransitionError {
    #[error("product is not available (status {status})")]
    NotAvailable { status: ProductStatus },
}

/// Seller-supplied fields for a new listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub condition: ProductCondition,
    pub seller_id: UserId,
    pub category_id: CategoryId,
    pub images: Vec<String>,
}

/// A listed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    price: Money,
    condition: ProductCondition,
    status: ProductStatus,
    seller_id: UserId,
    category_id: CategoryId,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Validate a draft and create an `AVAILABLE` listing.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use freemarket::domain::{
    ///     CategoryId, Product, ProductCondition, ProductDraft, ProductId, ProductStatus, UserId,
    /// };
    ///
    /// let draft = ProductDraft {
    ///     title: "Nike Air Max".into(),
    ///     description: "Worn twice".into(),
    ///     price: 8_500,
    ///     condition: ProductCondition::Good,
    ///     seller_id: UserId::new("user2").unwrap(),
    ///     category_id: CategoryId::new("fashion").unwrap(),
    ///     images: vec![],
    /// };
    /// let product = Product::new(ProductId::new("2").unwrap(), draft, Utc::now()).unwrap();
    /// assert_eq!(product.status(), ProductStatus::Available);
    /// ```
    pub fn new(
        id: ProductId,
        draft: ProductDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ProductValidationError> {
        let ProductDraft {
            title,
            description,
            price,
            condition,
            seller_id,
            category_id,
            images,
        } = draft;

        let title = title.trim().to_owned();
        if title.is_empty() {
            return Err(ProductValidationError::EmptyTitle);
        }
        let description = description.trim().to_owned();
        if description.is_empty() {
            return Err(ProductValidationError::EmptyDescription);
        }
        let amount =
            u64::try_from(price).map_err(|_| ProductValidationError::NegativePrice { amount: price })?;

        Ok(Self {
            id,
            title,
            description,
            price: Money::jpy(amount),
            condition,
            status: ProductStatus::Available,
            seller_id,
            category_id,
            images,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn condition(&self) -> ProductCondition {
        self.condition
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn seller_id(&self) -> &UserId {
        &self.seller_id
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the listing can still be bought or reserved.
    pub fn is_available(&self) -> bool {
        self.status == ProductStatus::Available
    }

    /// Whether `user_id` listed this product.
    pub fn is_listed_by(&self, user_id: &UserId) -> bool {
        &self.seller_id == user_id
    }

    /// Move the listing to `SOLD`.
    pub fn mark_as_sold(&mut self, now: DateTime<Utc>) -> Result<(), ProductTransitionError> {
        self.transition(ProductStatus::Sold, now)
    }

    /// Move the listing to `RESERVED`.
    pub fn reserve(&mut self, now: DateTime<Utc>) -> Result<(), ProductTransitionError> {
        self.transition(ProductStatus::Reserved, now)
    }

    fn transition(
        &mut self,
        target: ProductStatus,
        now: DateTime<Utc>,
    ) -> Result<(), ProductTransitionError> {
        if !self.is_available() {
            return Err(ProductTransitionError::NotAvailable {
                status: self.status,
            });
        }
        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}
