//! Domain primitives, aggregates, ports and services.
//!
//! Purpose: Define strongly typed marketplace entities and the use cases that
//! operate on them, independent of any transport or storage. Entities keep
//! their fields private and enforce invariants in constructors and
//! mutators.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Product, StampCard, Review, User, CategoryRanking: aggregates.
//! - `*Service`: implementations of the driving ports in [`ports`].

pub mod category_ranking;
pub mod checkout_service;
pub mod error;
pub mod ids;
pub mod money;
pub mod ports;
pub mod product;
pub mod product_search;
pub mod product_service;
pub mod ranking_service;
pub mod review;
pub mod review_service;
pub mod stamp_card;
pub mod stamp_card_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::category_ranking::{CategoryRanking, sort_by_rank};
pub use self::checkout_service::CheckoutService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{
    CategoryId, IdentifierValidationError, ProductId, ReviewId, StampCardId, UserId,
};
pub use self::money::{MARKETPLACE_CURRENCY, Money};
pub use self::product::{
    ParseProductConditionError, Product, ProductCondition, ProductDraft, ProductStatus,
    ProductTransitionError, ProductValidationError,
};
pub use self::product_search::{ProductSearchCriteria, SearchCriteriaError, sort_newest_first};
pub use self::product_service::ProductService;
pub use self::ranking_service::RankingService;
pub use self::review::{
    RATING_MAX, RATING_MIN, Rating, Review, ReviewDraft, ReviewValidationError,
    sort_most_recent_first,
};
pub use self::review_service::ReviewService;
pub use self::stamp_card::{STAMPS_FOR_REWARD, StampCard, StampCardError};
pub use self::stamp_card_service::StampCardService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserProfile, UserValidationError};
pub use self::user_service::UserService;
