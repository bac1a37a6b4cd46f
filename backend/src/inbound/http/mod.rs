//! HTTP inbound adapter exposing the marketplace procedures.
//!
//! Procedures are flat, dot-named routes under `/api/v1`: queries are `GET`
//! with query-string input and mutations are `POST` with a JSON body.

use actix_web::web;

pub mod error;
pub mod health;
pub mod products;
pub mod rankings;
pub mod reviews;
pub mod schemas;
pub mod stamp_cards;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every procedure and the extractor error handlers on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .service(products::search_products)
        .service(products::get_product)
        .service(products::create_product)
        .service(products::purchase_product)
        .service(products::reserve_product)
        .service(reviews::create_review)
        .service(reviews::get_timeline)
        .service(reviews::list_product_reviews)
        .service(rankings::get_categories)
        .service(stamp_cards::get_stamp_card)
        .service(stamp_cards::add_stamp)
        .service(stamp_cards::use_reward)
        .service(users::get_user)
        .service(users::update_profile);
}
