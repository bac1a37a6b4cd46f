//! User profile handlers.
//!
//! ```text
//! GET  /api/v1/user.get?userId=user1
//! POST /api/v1/user.updateProfile {"userId":"user1","displayName":"Yamada"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::UpdateProfileRequest;
use crate::domain::{User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_identifier, require};

const USER_ID: FieldName = FieldName::new("userId");

/// Public profile of a marketplace member.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: Option<String>,
    /// Average review score between 0 and 5.
    #[schema(example = 4.8)]
    pub rating: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserPayload {
    fn from(value: &User) -> Self {
        Self {
            id: value.id().to_string(),
            username: value.username().to_owned(),
            email: value.email().to_owned(),
            display_name: value.display_name().to_owned(),
            avatar: value.avatar().map(str::to_owned),
            rating: value.rating(),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserLookupParams {
    pub user_id: Option<String>,
}

/// Fetch a profile.
#[utoipa::path(
    get,
    path = "/api/v1/user.get",
    params(UserLookupParams),
    responses(
        (status = 200, description = "Profile", body = UserPayload),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "userGet"
)]
#[get("/user.get")]
pub async fn get_user(
    state: web::Data<HttpState>,
    params: web::Query<UserLookupParams>,
) -> ApiResult<web::Json<UserPayload>> {
    let raw = require(params.into_inner().user_id, USER_ID)?;
    let user_id = parse_identifier(raw, USER_ID, |id| UserId::new(id))?;
    let user = state.users_query.get(&user_id).await?;
    Ok(web::Json(UserPayload::from(&user)))
}

/// Request body for `user.updateProfile`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
    pub user_id: Option<String>,
    pub display_name: Option<String>,
    /// Omit to keep the current avatar.
    pub avatar: Option<String>,
}

/// Change the display name or avatar.
#[utoipa::path(
    post,
    path = "/api/v1/user.updateProfile",
    request_body = UpdateProfileBody,
    responses(
        (status = 200, description = "Updated profile", body = UserPayload),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "userUpdateProfile"
)]
#[post("/user.updateProfile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateProfileBody>,
) -> ApiResult<web::Json<UserPayload>> {
    let UpdateProfileBody {
        user_id,
        display_name,
        avatar,
    } = payload.into_inner();
    let user_id = parse_identifier(require(user_id, USER_ID)?, USER_ID, |id| UserId::new(id))?;
    let display_name = require(display_name, FieldName::new("displayName"))?;
    let user = state
        .users
        .update_profile(UpdateProfileRequest {
            user_id,
            display_name,
            avatar,
        })
        .await?;
    Ok(web::Json(UserPayload::from(&user)))
}
