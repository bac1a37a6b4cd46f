//! Listing search criteria.

use crate::domain::{CategoryId, Product, ProductCondition, UserId};

/// Criteria rejected before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchCriteriaError {
    #[error("minPrice ({min}) must not exceed maxPrice ({max})")]
    InvertedPriceRange { min: u64, max: u64 },
}

/// Optional filters, all of which must hold for a product to match.
///
/// An empty criteria value matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearchCriteria {
    /// Case-insensitive substring of the title or description.
    pub keyword: Option<String>,
    pub category_id: Option<CategoryId>,
    /// Inclusive lower bound on the price amount.
    pub min_price: Option<u64>,
    /// Inclusive upper bound on the price amount.
    pub max_price: Option<u64>,
    pub condition: Option<ProductCondition>,
    pub seller_id: Option<UserId>,
}

impl ProductSearchCriteria {
    /// Reject contradictory bounds.
    pub fn validate(&self) -> Result<(), SearchCriteriaError> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) if min > max => {
                Err(SearchCriteriaError::InvertedPriceRange { min, max })
            }
            _ => Ok(()),
        }
    }

    /// Whether `product` satisfies every supplied predicate.
    ///
    /// # Examples
    /// ```
    /// use freemarket::domain::ProductSearchCriteria;
    ///
    /// let criteria = ProductSearchCriteria {
    ///     keyword: Some("IPHONE".into()),
    ///     ..ProductSearchCriteria::default()
    /// };
    /// assert!(criteria.validate().is_ok());
    /// ```
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_keyword(product)
            && self
                .category_id
                .as_ref()
                .is_none_or(|id| product.category_id() == id)
            && self
                .min_price
                .is_none_or(|min| product.price().amount >= min)
            && self
                .max_price
                .is_none_or(|max| product.price().amount <= max)
            && self
                .condition
                .is_none_or(|condition| product.condition() == condition)
            && self
                .seller_id
                .as_ref()
                .is_none_or(|id| product.seller_id() == id)
    }

    fn matches_keyword(&self, product: &Product) -> bool {
        let Some(keyword) = self.keyword.as_deref() else {
            return true;
        };
        let needle = keyword.to_lowercase();
        product.title().to_lowercase().contains(&needle)
            || product.description().to_lowercase().contains(&needle)
    }
}

/// Order search results newest first, breaking ties by identifier.
pub fn sort_newest_first(products: &mut [Product]) {
    products.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}
