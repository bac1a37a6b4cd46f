//! Startup seeding orchestration.

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    CategoryRankingRepository, CategoryRankingRepositoryError, ProductRepository,
    ProductRepositoryError, ReviewRepository, ReviewRepositoryError, StampCardRepository,
    StampCardRepositoryError, UserRepository, UserRepositoryError,
};
use crate::example_data::samples::{SampleDataError, sample_data};

/// Stores receiving the sample records.
pub struct ExampleDataPorts<'a> {
    pub products: &'a dyn ProductRepository,
    pub stamp_cards: &'a dyn StampCardRepository,
    pub reviews: &'a dyn ReviewRepository,
    pub rankings: &'a dyn CategoryRankingRepository,
    pub users: &'a dyn UserRepository,
}

/// Counts of the records written by [`seed_example_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub products: usize,
    pub reviews: usize,
    pub stamp_cards: usize,
    pub rankings: usize,
}

/// Errors returned while seeding example data.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// A sample record failed domain validation.
    #[error("sample data is invalid: {0}")]
    Samples(#[from] SampleDataError),
    #[error("failed to seed products: {0}")]
    Products(#[from] ProductRepositoryError),
    #[error("failed to seed stamp cards: {0}")]
    StampCards(#[from] StampCardRepositoryError),
    #[error("failed to seed reviews: {0}")]
    Reviews(#[from] ReviewRepositoryError),
    #[error("failed to seed category rankings: {0}")]
    Rankings(#[from] CategoryRankingRepositoryError),
    #[error("failed to seed users: {0}")]
    Users(#[from] UserRepositoryError),
}

/// Write the sample marketplace into the given stores.
///
/// Products, reviews and users are upserted by identifier, and the ranking
/// projection is replaced. Stamp cards that already exist are left alone.
///
/// # Examples
///
/// ```rust
/// use freemarket::example_data::{ExampleDataPorts, seed_example_data};
/// use freemarket::outbound::memory::InMemoryStores;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let stores = InMemoryStores::default();
/// let summary = seed_example_data(&ExampleDataPorts {
///     products: &*stores.products,
///     stamp_cards: &*stores.stamp_cards,
///     reviews: &*stores.reviews,
///     rankings: &*stores.rankings,
///     users: &*stores.users,
/// })
/// .await?;
/// assert_eq!(summary.products, 4);
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data(
    ports: &ExampleDataPorts<'_>,
) -> Result<SeedSummary, StartupSeedingError> {
    let data = sample_data()?;
    let summary = SeedSummary {
        users: data.users.len(),
        products: data.products.len(),
        reviews: data.reviews.len(),
        stamp_cards: data.stamp_cards.len(),
        rankings: data.rankings.len(),
    };

    for user in &data.users {
        ports.users.save(user).await?;
    }
    for product in &data.products {
        ports.products.save(product).await?;
    }
    for review in &data.reviews {
        ports.reviews.save(review).await?;
    }
    for card in data.stamp_cards {
        ports.stamp_cards.find_or_create(card).await?;
    }
    ports.rankings.replace_all(data.rankings).await?;

    info!(
        users = summary.users,
        products = summary.products,
        reviews = summary.reviews,
        stamp_cards = summary.stamp_cards,
        rankings = summary.rankings,
        "example data seeded"
    );
    Ok(summary)
}
