//! Review procedures.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{CreateReviewRequest, DEFAULT_TIMELINE_LIMIT};
use crate::domain::{ProductId, Review, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_identifier, require};

const PRODUCT_ID: FieldName = FieldName::new("productId");
const BUYER_ID: FieldName = FieldName::new("buyerId");
const SELLER_ID: FieldName = FieldName::new("sellerId");

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub id: String,
    pub product_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub rating: u8,
    pub comment: String,
    pub product_title: String,
    pub buyer_name: String,
    pub created_at: String,
}

impl From<&Review> for ReviewPayload {
    fn from(value: &Review) -> Self {
        Self {
            id: value.id.to_string(),
            product_id: value.product_id.to_string(),
            buyer_id: value.buyer_id.to_string(),
            seller_id: value.seller_id.to_string(),
            rating: value.rating.value(),
            comment: value.comment.clone(),
            product_title: value.product_title.clone(),
            buyer_name: value.buyer_name.clone(),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

fn payloads(reviews: &[Review]) -> Vec<ReviewPayload> {
    reviews.iter().map(ReviewPayload::from).collect()
}

/// Request body for `review.create`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewBody {
    pub product_id: Option<String>,
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
    /// Whole stars from 1 to 5.
    pub rating: Option<i64>,
    /// Free text; may be empty but must be present.
    pub comment: Option<String>,
    pub product_title: Option<String>,
    pub buyer_name: Option<String>,
}

fn parse_create_body(body: CreateReviewBody) -> ApiResult<CreateReviewRequest> {
    Ok(CreateReviewRequest {
        product_id: parse_identifier(require(body.product_id, PRODUCT_ID)?, PRODUCT_ID, |id| {
            ProductId::new(id)
        })?,
        buyer_id: parse_identifier(require(body.buyer_id, BUYER_ID)?, BUYER_ID, |id| {
            UserId::new(id)
        })?,
        seller_id: parse_identifier(require(body.seller_id, SELLER_ID)?, SELLER_ID, |id| {
            UserId::new(id)
        })?,
        rating: require(body.rating, FieldName::new("rating"))?,
        comment: require(body.comment, FieldName::new("comment"))?,
        product_title: require(body.product_title, FieldName::new("productTitle"))?,
        buyer_name: require(body.buyer_name, FieldName::new("buyerName"))?,
    })
}

/// Post a review of a completed purchase.
#[utoipa::path(
    post,
    path = "/api/v1/review.create",
    request_body = CreateReviewBody,
    responses(
        (status = 200, description = "Review stored", body = ReviewPayload),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "reviewCreate"
)]
#[post("/review.create")]
pub async fn create_review(
    state: web::Data<HttpState>,
    payload: web::Json<CreateReviewBody>,
) -> ApiResult<web::Json<ReviewPayload>> {
    let request = parse_create_body(payload.into_inner())?;
    let review = state.reviews.create(request).await?;
    Ok(web::Json(ReviewPayload::from(&review)))
}

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TimelineParams {
    /// Maximum number of reviews; defaults to 10.
    pub limit: Option<usize>,
}

/// Most recent reviews across the marketplace.
#[utoipa::path(
    get,
    path = "/api/v1/review.getTimeline",
    params(TimelineParams),
    responses(
        (status = 200, description = "Reviews, newest first", body = [ReviewPayload]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "reviewGetTimeline"
)]
#[get("/review.getTimeline")]
pub async fn get_timeline(
    state: web::Data<HttpState>,
    params: web::Query<TimelineParams>,
) -> ApiResult<web::Json<Vec<ReviewPayload>>> {
    let limit = params.into_inner().limit.unwrap_or(DEFAULT_TIMELINE_LIMIT);
    let reviews = state.reviews_query.timeline(limit).await?;
    Ok(web::Json(payloads(&reviews)))
}

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductReviewsParams {
    pub product_id: Option<String>,
}

/// Reviews left for one listing.
#[utoipa::path(
    get,
    path = "/api/v1/review.listByProduct",
    params(ProductReviewsParams),
    responses(
        (status = 200, description = "Reviews, newest first", body = [ReviewPayload]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "reviewListByProduct"
)]
#[get("/review.listByProduct")]
pub async fn list_product_reviews(
    state: web::Data<HttpState>,
    params: web::Query<ProductReviewsParams>,
) -> ApiResult<web::Json<Vec<ReviewPayload>>> {
    let raw = require(params.into_inner().product_id, PRODUCT_ID)?;
    let product_id = parse_identifier(raw, PRODUCT_ID, |id| ProductId::new(id))?;
    let reviews = state.reviews_query.list_for_product(&product_id).await?;
    Ok(web::Json(payloads(&reviews)))
}
