//! Shared helpers for marketplace integration tests.
//!
//! Integration tests compile as separate crates, so the wiring of services
//! over the in-memory stores lives here rather than in each test file.

use std::sync::Arc;

use freemarket::domain::{
    CheckoutService, ProductService, RankingService, ReviewService, StampCardService, UserService,
};
use freemarket::example_data::{ExampleDataPorts, seed_example_data};
use freemarket::inbound::http::state::HttpState;
use freemarket::outbound::memory::InMemoryStores;
use mockable::DefaultClock;

/// Handler state over `stores` with the system clock.
pub fn http_state(stores: &InMemoryStores) -> HttpState {
    let clock = Arc::new(DefaultClock);
    let products = Arc::new(ProductService::new(stores.products.clone(), clock.clone()));
    let stamp_cards = Arc::new(StampCardService::new(
        stores.stamp_cards.clone(),
        clock.clone(),
    ));
    let reviews = Arc::new(ReviewService::new(stores.reviews.clone(), clock.clone()));
    let users = Arc::new(UserService::new(stores.users.clone(), clock));
    HttpState {
        products: products.clone(),
        products_query: products.clone(),
        checkout: Arc::new(CheckoutService::new(products, stamp_cards.clone())),
        stamp_cards: stamp_cards.clone(),
        stamp_cards_query: stamp_cards,
        reviews: reviews.clone(),
        reviews_query: reviews,
        rankings: Arc::new(RankingService::new(stores.rankings.clone())),
        users: users.clone(),
        users_query: users,
    }
}

/// Stores pre-loaded with the sample marketplace.
pub async fn seeded_stores() -> InMemoryStores {
    let stores = InMemoryStores::default();
    seed_example_data(&ExampleDataPorts {
        products: &*stores.products,
        stamp_cards: &*stores.stamp_cards,
        reviews: &*stores.reviews,
        rankings: &*stores.rankings,
        users: &*stores.users,
    })
    .await
    .expect("sample data seeds");
    stores
}
