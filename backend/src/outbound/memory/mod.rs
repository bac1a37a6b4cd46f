//! Process-local repository adapters.
//!
//! Each store keeps its entities in a map behind a `std::sync::RwLock`. Locks
//! are taken and released inside a single call and never held across an
//! `.await`. A poisoned lock surfaces as the port's `Query` error. Nothing is
//! persisted; state is lost when the process exits.

mod category_ranking_repository;
mod product_repository;
mod review_repository;
mod stamp_card_repository;
mod user_repository;

use std::sync::Arc;

pub use category_ranking_repository::InMemoryCategoryRankingRepository;
pub use product_repository::InMemoryProductRepository;
pub use review_repository::InMemoryReviewRepository;
pub use stamp_card_repository::InMemoryStampCardRepository;
pub use user_repository::InMemoryUserRepository;

/// One empty instance of every in-memory store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStores {
    pub products: Arc<InMemoryProductRepository>,
    pub stamp_cards: Arc<InMemoryStampCardRepository>,
    pub reviews: Arc<InMemoryReviewRepository>,
    pub rankings: Arc<InMemoryCategoryRankingRepository>,
    pub users: Arc<InMemoryUserRepository>,
}
