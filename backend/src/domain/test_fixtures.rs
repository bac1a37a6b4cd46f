//! Shared builders for domain unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    CategoryId, Product, ProductCondition, ProductDraft, ProductId, StampCard, StampCardId, UserId,
};

pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 15, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    clock_at(fixture_timestamp())
}

/// Clock frozen at `utc_now`.
pub(crate) fn clock_at(utc_now: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixtureClock { utc_now })
}

pub(crate) fn user(id: &str) -> UserId {
    UserId::new(id).expect("fixture user id")
}

pub(crate) fn product_id(id: &str) -> ProductId {
    ProductId::new(id).expect("fixture product id")
}

/// An `AVAILABLE` listing sold by `seller`.
pub(crate) fn listing(id: &str, seller: &str) -> Product {
    Product::new(
        product_id(id),
        ProductDraft {
            title: "Nintendo Switch".to_owned(),
            description: "Comes with two games".to_owned(),
            price: 25_000,
            condition: ProductCondition::Good,
            seller_id: user(seller),
            category_id: CategoryId::new("books").expect("fixture category id"),
            images: vec!["/images/switch.jpg".to_owned()],
        },
        fixture_timestamp() - chrono::Duration::days(1),
    )
    .expect("fixture listing")
}

/// A stamp card for `owner` holding `stamps` stamps.
pub(crate) fn stamp_card(owner: &str, stamps: u32) -> StampCard {
    let mut card = StampCard::new(
        StampCardId::new(format!("card-{owner}")).expect("fixture card id"),
        user(owner),
        fixture_timestamp() - chrono::Duration::days(7),
    );
    for _ in 0..stamps {
        card.add_stamp(fixture_timestamp() - chrono::Duration::days(1));
    }
    card
}
