//! Wiring of domain services over the in-memory stores.

use std::sync::Arc;

use mockable::Clock;

use freemarket::domain::{
    CheckoutService, ProductService, RankingService, ReviewService, StampCardService, UserService,
};
use freemarket::inbound::http::state::HttpState;
use freemarket::outbound::memory::InMemoryStores;

/// Build the handler state, sharing one service instance per aggregate
/// between its command and query ports.
pub(crate) fn build_http_state(stores: &InMemoryStores, clock: Arc<dyn Clock>) -> HttpState {
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
