//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::Clock;

use crate::domain::test_fixtures::fixture_clock;
use crate::domain::{
    CheckoutService, ProductService, RankingService, ReviewService, StampCardService, UserService,
};
use crate::example_data::{ExampleDataPorts, seed_example_data};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStores;

/// Wire every domain service over the given in-memory stores.
pub fn state_for(stores: &InMemoryStores) -> HttpState {
    state_with_clock(stores, fixture_clock())
}

/// Like [`state_for`], with the services reading time from `clock`.
pub fn state_with_clock(stores: &InMemoryStores, clock: Arc<dyn Clock>) -> HttpState {
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

/// Application exposing the `/api/v1` procedures over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").configure(configure))
}
