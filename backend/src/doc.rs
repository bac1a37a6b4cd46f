//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every procedure under `/api/v1`, the health probes,
//! and the error envelope wrappers from [`crate::inbound::http::schemas`].
//! Swagger UI serves it in debug builds and `openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::products::{
    CreateProductBody, MoneyPayload, ProductPayload, PurchaseBody, PurchaseResponse, ReserveBody,
    SuccessResponse,
};
use crate::inbound::http::rankings::CategoryRankingPayload;
use crate::inbound::http::reviews::{CreateReviewBody, ReviewPayload};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::stamp_cards::{StampCardBody, StampCardPayload};
use crate::inbound::http::users::{UpdateProfileBody, UserPayload};

/// OpenAPI document for the marketplace API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Freemarket API",
        description = "Procedures for listings, purchases, loyalty stamps, reviews and rankings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::search_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::purchase_product,
        crate::inbound::http::products::reserve_product,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::reviews::get_timeline,
        crate::inbound::http::reviews::list_product_reviews,
        crate::inbound::http::rankings::get_categories,
        crate::inbound::http::stamp_cards::get_stamp_card,
        crate::inbound::http::stamp_cards::add_stamp,
        crate::inbound::http::stamp_cards::use_reward,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        MoneyPayload,
        ProductPayload,
        CreateProductBody,
        PurchaseBody,
        PurchaseResponse,
        ReserveBody,
        SuccessResponse,
        ReviewPayload,
        CreateReviewBody,
        CategoryRankingPayload,
        StampCardPayload,
        StampCardBody,
        UserPayload,
        UpdateProfileBody,
    )),
    tags(
        (name = "products", description = "Listings and the purchase flow"),
        (name = "reviews", description = "Buyer reviews"),
        (name = "rankings", description = "Category sales rankings"),
        (name = "stampCards", description = "Loyalty stamp cards"),
        (name = "users", description = "User profiles"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
