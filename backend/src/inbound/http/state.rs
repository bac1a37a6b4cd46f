//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CheckoutCommand, ProductCommand, ProductQuery, RankingQuery, ReviewCommand, ReviewQuery,
    StampCardCommand, StampCardQuery, UserCommand, UserQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductCommand>,
    pub products_query: Arc<dyn ProductQuery>,
    pub checkout: Arc<dyn CheckoutCommand>,
    pub stamp_cards: Arc<dyn StampCardCommand>,
    pub stamp_cards_query: Arc<dyn StampCardQuery>,
    pub reviews: Arc<dyn ReviewCommand>,
    pub reviews_query: Arc<dyn ReviewQuery>,
    pub rankings: Arc<dyn RankingQuery>,
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
}
