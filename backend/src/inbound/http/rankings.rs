//! Category ranking procedure.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::CategoryRanking;
use crate::domain::ports::DEFAULT_RANKING_LIMIT;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRankingPayload {
    pub category_id: String,
    pub category_name: String,
    pub sold_count: u64,
    /// Yen.
    pub total_revenue: u64,
    #[schema(example = 1)]
    pub rank: u32,
}

impl From<&CategoryRanking> for CategoryRankingPayload {
    fn from(value: &CategoryRanking) -> Self {
        Self {
            category_id: value.category_id.to_string(),
            category_name: value.category_name.clone(),
            sold_count: value.sold_count,
            total_revenue: value.total_revenue,
            rank: value.rank,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RankingParams {
    /// Number of categories; defaults to 5.
    pub limit: Option<usize>,
}

/// Best-selling categories in rank order.
#[utoipa::path(
    get,
    path = "/api/v1/ranking.getCategories",
    params(RankingParams),
    responses(
        (status = 200, description = "Top categories", body = [CategoryRankingPayload]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["rankings"],
    operation_id = "rankingGetCategories"
)]
#[get("/ranking.getCategories")]
pub async fn get_categories(
    state: web::Data<HttpState>,
    params: web::Query<RankingParams>,
) -> ApiResult<web::Json<Vec<CategoryRankingPayload>>> {
    let limit = params.into_inner().limit.unwrap_or(DEFAULT_RANKING_LIMIT);
    let rankings = state.rankings.top_categories(limit).await?;
    Ok(web::Json(
        rankings.iter().map(CategoryRankingPayload::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    use crate::inbound::http::test_utils::{seeded_stores, state_for, test_app};

    #[rstest]
    #[case("/api/v1/ranking.getCategories", 5)]
    #[case("/api/v1/ranking.getCategories?limit=2", 2)]
    #[case("/api/v1/ranking.getCategories?limit=0", 0)]
    #[actix_web::test]
    async fn returns_ranked_categories(#[case] uri: &str, #[case] expected: usize) {
        let stores = seeded_stores().await;
        let app = actix_test::init_service(test_app(state_for(&stores))).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        let items = body.as_array().expect("array");
        assert_eq!(items.len(), expected);
        if let Some(first) = items.first() {
            assert_eq!(first["categoryId"], "electronics");
            assert_eq!(first["rank"], 1);
        }
    }

    #[actix_web::test]
    async fn negative_limit_is_rejected() {
        let stores = seeded_stores().await;
        let app = actix_test::init_service(test_app(state_for(&stores))).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/ranking.getCategories?limit=-1")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
