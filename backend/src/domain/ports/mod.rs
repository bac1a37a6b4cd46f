//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Command`, `*Query`) are implemented by domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod category_ranking_repository;
mod checkout_command;
mod product_command;
mod product_query;
mod product_repository;
mod ranking_query;
mod review_command;
mod review_query;
mod review_repository;
mod stamp_card_command;
mod stamp_card_query;
mod stamp_card_repository;
mod user_command;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use category_ranking_repository::MockCategoryRankingRepository;
pub use category_ranking_repository::{CategoryRankingRepository, CategoryRankingRepositoryError};
#[cfg(test)]
pub use checkout_command::MockCheckoutCommand;
pub use checkout_command::{CheckoutCommand, PurchaseOutcome};
#[cfg(test)]
pub use product_command::MockProductCommand;
pub use product_command::{CreateProductRequest, ProductCommand};
#[cfg(test)]
pub use product_query::MockProductQuery;
pub use product_query::ProductQuery;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
#[cfg(test)]
pub use ranking_query::MockRankingQuery;
pub use ranking_query::{DEFAULT_RANKING_LIMIT, RankingQuery};
#[cfg(test)]
pub use review_command::MockReviewCommand;
pub use review_command::{CreateReviewRequest, ReviewCommand};
#[cfg(test)]
pub use review_query::MockReviewQuery;
pub use review_query::{DEFAULT_TIMELINE_LIMIT, ReviewQuery};
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{ReviewRepository, ReviewRepositoryError};
#[cfg(test)]
pub use stamp_card_command::MockStampCardCommand;
pub use stamp_card_command::StampCardCommand;
#[cfg(test)]
pub use stamp_card_query::MockStampCardQuery;
pub use stamp_card_query::StampCardQuery;
#[cfg(test)]
pub use stamp_card_repository::MockStampCardRepository;
pub use stamp_card_repository::{StampCardRepository, StampCardRepositoryError};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::{UpdateProfileRequest, UserCommand};
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
