//! Category sales rankings.

use serde::{Deserialize, Serialize};

use crate::domain::CategoryId;

/// Sales totals for one category, positioned by `rank` (1 is best).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRanking {
    pub category_id: CategoryId,
    pub category_name: String,
    pub sold_count: u64,
    pub total_revenue: u64,
    pub rank: u32,
}

/// Order rankings by rank, then by category for stable output.
pub fn sort_by_rank(rankings: &mut [CategoryRanking]) {
    rankings.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
}
