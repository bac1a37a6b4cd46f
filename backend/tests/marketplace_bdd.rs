//! Behaviour tests for the purchase flow and loyalty stamp cards.
//!
//! Scenarios drive the domain ports directly over the seeded in-memory
//! stores; HTTP mapping is covered by `marketplace_http.rs`.

use std::cell::RefCell;

use freemarket::domain::ports::PurchaseOutcome;
use freemarket::domain::{Error, ProductId, ProductStatus, StampCard, UserId};
use freemarket::inbound::http::state::HttpState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

mod support;

use support::{http_state, seeded_stores};

struct MarketplaceWorld {
    runtime: Runtime,
    state: RefCell<Option<HttpState>>,
    purchase: RefCell<Option<Result<PurchaseOutcome, Error>>>,
    reward: RefCell<Option<Result<StampCard, Error>>>,
}

impl MarketplaceWorld {
    fn new() -> Self {
        Self {
            runtime: Runtime::new().expect("create runtime"),
            state: RefCell::new(None),
            purchase: RefCell::new(None),
            reward: RefCell::new(None),
        }
    }

    fn state(&self) -> HttpState {
        self.state
            .borrow()
            .clone()
            .expect("marketplace should be set up")
    }

    fn seed(&self) {
        let stores = self.runtime.block_on(seeded_stores());
        *self.state.borrow_mut() = Some(http_state(&stores));
    }

    fn stamps_for(&self, user: &str) -> u32 {
        let state = self.state();
        self.runtime
            .block_on(state.stamp_cards_query.get(&user_id(user)))
            .expect("stamp card lookup")
            .stamps()
    }
}

fn user_id(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn product_id(raw: &str) -> ProductId {
    ProductId::new(raw).expect("valid product id")
}

fn detail_code(error: &Error) -> Option<&str> {
    error
        .details()
        .and_then(|details| details.get("code"))
        .and_then(|code| code.as_str())
}

#[fixture]
fn world() -> MarketplaceWorld {
    MarketplaceWorld::new()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("the sample marketplace")]
fn the_sample_marketplace(world: &MarketplaceWorld) {
    world.seed();
}

#[given("{user} has reserved product {product}")]
fn user_has_reserved_product(world: &MarketplaceWorld, user: String, product: String) {
    let state = world.state();
    world
        .runtime
        .block_on(
            state
                .products
                .reserve(&product_id(&product), &user_id(&user)),
        )
        .expect("reservation succeeds");
}

#[given("{user} has collected {count} more stamps")]
fn user_has_collected_stamps(world: &MarketplaceWorld, user: String, count: u32) {
    let state = world.state();
    let user = user_id(&user);
    world.runtime.block_on(async {
        for _ in 0..count {
            state
                .stamp_cards
                .add_stamp(&user)
                .await
                .expect("stamp added");
        }
    });
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("{user} purchases product {product}")]
fn user_purchases_product(world: &MarketplaceWorld, user: String, product: String) {
    let state = world.state();
    let result = world.runtime.block_on(
        state
            .checkout
            .purchase(&product_id(&product), &user_id(&user)),
    );
    *world.purchase.borrow_mut() = Some(result);
}

#[when("{user} claims a reward")]
fn user_claims_a_reward(world: &MarketplaceWorld, user: String) {
    let state = world.state();
    let result = world
        .runtime
        .block_on(state.stamp_cards.use_reward(&user_id(&user)));
    *world.reward.borrow_mut() = Some(result);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the purchase succeeds with a stamp")]
fn the_purchase_succeeds(world: &MarketplaceWorld) {
    let purchase = world.purchase.borrow();
    let outcome = match purchase.as_ref().expect("purchase attempted") {
        Ok(outcome) => outcome,
        Err(error) => panic!("expected purchase to succeed, got {error:?}"),
    };
    assert!(outcome.stamp_awarded);
    assert_eq!(outcome.product.status(), ProductStatus::Sold);
}

#[then("the purchase is rejected with {code}")]
fn the_purchase_is_rejected(world: &MarketplaceWorld, code: String) {
    let purchase = world.purchase.borrow();
    match purchase.as_ref().expect("purchase attempted") {
        Ok(outcome) => panic!("expected rejection, got {outcome:?}"),
        Err(error) => assert_eq!(detail_code(error), Some(code.as_str())),
    }
}

#[then("product {product} is {status}")]
fn product_has_status(world: &MarketplaceWorld, product: String, status: String) {
    let state = world.state();
    let listing = world
        .runtime
        .block_on(state.products_query.get(&product_id(&product)))
        .expect("product lookup");
    assert_eq!(listing.status().as_str(), status);
}

#[then("{user} holds {count} stamps")]
fn user_holds_stamps(world: &MarketplaceWorld, user: String, count: u32) {
    assert_eq!(world.stamps_for(&user), count);
}

#[then("the reward is granted")]
fn the_reward_is_granted(world: &MarketplaceWorld) {
    let reward = world.reward.borrow();
    if let Err(error) = reward.as_ref().expect("reward attempted") {
        panic!("expected reward to be granted, got {error:?}");
    }
}

#[then("the reward is refused with {code}")]
fn the_reward_is_refused(world: &MarketplaceWorld, code: String) {
    let reward = world.reward.borrow();
    match reward.as_ref().expect("reward attempted") {
        Ok(card) => panic!("expected refusal, got {card:?}"),
        Err(error) => assert_eq!(detail_code(error), Some(code.as_str())),
    }
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/purchase.feature",
    name = "Buyer purchases an available listing"
)]
fn buyer_purchases_an_available_listing(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/purchase.feature",
    name = "Seller cannot buy their own listing"
)]
fn seller_cannot_buy_their_own_listing(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/purchase.feature",
    name = "Sold listing cannot be bought again"
)]
fn sold_listing_cannot_be_bought_again(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/purchase.feature",
    name = "Reserved listing cannot be bought"
)]
fn reserved_listing_cannot_be_bought(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/stamp_card.feature",
    name = "Ten stamps unlock a reward"
)]
fn ten_stamps_unlock_a_reward(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/stamp_card.feature",
    name = "Claiming with too few stamps"
)]
fn claiming_with_too_few_stamps(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/stamp_card.feature",
    name = "Surplus stamps carry over"
)]
fn surplus_stamps_carry_over(world: MarketplaceWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/stamp_card.feature",
    name = "A user without a card cannot claim"
)]
fn a_user_without_a_card_cannot_claim(world: MarketplaceWorld) {
    let _ = world;
}
