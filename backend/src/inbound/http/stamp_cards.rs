//! Loyalty stamp card procedures.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{StampCard, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::products::SuccessResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_identifier, require};

const USER_ID: FieldName = FieldName::new("userId");

/// Stamp card with the derived reward figures.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StampCardPayload {
    pub id: String,
    pub user_id: String,
    #[schema(example = 3)]
    pub stamps: u32,
    pub total_purchases: u32,
    pub last_purchase_date: Option<String>,
    #[schema(example = 7)]
    pub stamps_until_reward: u32,
    pub reward_count: u32,
    pub can_get_reward: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&StampCard> for StampCardPayload {
    fn from(value: &StampCard) -> Self {
        Self {
            id: value.id().to_string(),
            user_id: value.user_id().to_string(),
            stamps: value.stamps(),
            total_purchases: value.total_purchases(),
            last_purchase_date: value.last_purchase_date().map(|at| at.to_rfc3339()),
            stamps_until_reward: value.stamps_until_reward(),
            reward_count: value.reward_count(),
            can_get_reward: value.can_get_reward(),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StampCardParams {
    pub user_id: Option<String>,
}

/// Body shared by `stampCard.addStamp` and `stampCard.useReward`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StampCardBody {
    pub user_id: Option<String>,
}

fn parse_user(value: Option<String>) -> ApiResult<UserId> {
    parse_identifier(require(value, USER_ID)?, USER_ID, |id| UserId::new(id))
}

/// Fetch a user's card, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/api/v1/stampCard.get",
    params(StampCardParams),
    responses(
        (status = 200, description = "Stamp card", body = StampCardPayload),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["stampCards"],
    operation_id = "stampCardGet"
)]
#[get("/stampCard.get")]
pub async fn get_stamp_card(
    state: web::Data<HttpState>,
    params: web::Query<StampCardParams>,
) -> ApiResult<web::Json<StampCardPayload>> {
    let user_id = parse_user(params.into_inner().user_id)?;
    let card = state.stamp_cards_query.get(&user_id).await?;
    Ok(web::Json(StampCardPayload::from(&card)))
}

/// Credit one stamp.
#[utoipa::path(
    post,
    path = "/api/v1/stampCard.addStamp",
    request_body = StampCardBody,
    responses(
        (status = 200, description = "Stamp added", body = SuccessResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Concurrent update could not be applied", body = ErrorSchema)
    ),
    tags = ["stampCards"],
    operation_id = "stampCardAddStamp"
)]
#[post("/stampCard.addStamp")]
pub async fn add_stamp(
    state: web::Data<HttpState>,
    payload: web::Json<StampCardBody>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let user_id = parse_user(payload.into_inner().user_id)?;
    state.stamp_cards.add_stamp(&user_id).await?;
    Ok(web::Json(SuccessResponse { success: true }))
}

/// Redeem ten stamps for one reward.
#[utoipa::path(
    post,
    path = "/api/v1/stampCard.useReward",
    request_body = StampCardBody,
    responses(
        (status = 200, description = "Reward redeemed", body = SuccessResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User has no stamp card", body = ErrorSchema),
        (status = 409, description = "Not enough stamps", body = ErrorSchema)
    ),
    tags = ["stampCards"],
    operation_id = "stampCardUseReward"
)]
#[post("/stampCard.useReward")]
pub async fn use_reward(
    state: web::Data<HttpState>,
    payload: web::Json<StampCardBody>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let user_id = parse_user(payload.into_inner().user_id)?;
    state.stamp_cards.use_reward(&user_id).await?;
    Ok(web::Json(SuccessResponse { success: true }))
}
