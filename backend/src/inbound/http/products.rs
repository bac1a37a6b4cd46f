//! Product procedures.
//!
//! ```text
//! GET  /api/v1/product.search?keyword=switch&maxPrice=30000
//! GET  /api/v1/product.get?productId=1
//! POST /api/v1/product.create {"title":"...","price":25000,...}
//! POST /api/v1/product.purchase {"productId":"1","buyerId":"user2"}
//! POST /api/v1/product.reserve {"productId":"1","userId":"user2"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CreateProductRequest;
use crate::domain::{CategoryId, Money, Product, ProductId, ProductSearchCriteria, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_condition, parse_identifier, require};

const PRODUCT_ID: FieldName = FieldName::new("productId");
const SELLER_ID: FieldName = FieldName::new("sellerId");
const CATEGORY_ID: FieldName = FieldName::new("categoryId");
const CONDITION: FieldName = FieldName::new("condition");

/// Price as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyPayload {
    #[schema(example = 25000)]
    pub amount: u64,
    #[schema(example = "JPY")]
    pub currency: String,
}

impl From<&Money> for MoneyPayload {
    fn from(value: &Money) -> Self {
        Self {
            amount: value.amount,
            currency: value.currency.clone(),
        }
    }
}

/// Listing payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: MoneyPayload,
    /// One of `NEW`, `LIKE_NEW`, `GOOD`, `FAIR`, `POOR`.
    #[schema(example = "GOOD")]
    pub condition: String,
    /// One of `AVAILABLE`, `SOLD`, `RESERVED`.
    #[schema(example = "AVAILABLE")]
    pub status: String,
    pub seller_id: String,
    pub category_id: String,
    pub images: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductPayload {
    fn from(value: &Product) -> Self {
        Self {
            id: value.id().to_string(),
            title: value.title().to_owned(),
            description: value.description().to_owned(),
            price: MoneyPayload::from(value.price()),
            condition: value.condition().as_str().to_owned(),
            status: value.status().as_str().to_owned(),
            seller_id: value.seller_id().to_string(),
            category_id: value.category_id().to_string(),
            images: value.images().to_vec(),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

/// Search filters; every field is optional and all supplied filters must
/// match.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductSearchParams {
    /// Case-insensitive substring of the title or description.
    pub keyword: Option<String>,
    pub category_id: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<u64>,
    /// Inclusive upper price bound.
    pub max_price: Option<u64>,
    pub condition: Option<String>,
    pub seller_id: Option<String>,
}

fn parse_search_params(params: ProductSearchParams) -> ApiResult<ProductSearchCriteria> {
    let ProductSearchParams {
        keyword,
        category_id,
        min_price,
        max_price,
        condition,
        seller_id,
    } = params;
    Ok(ProductSearchCriteria {
        keyword: keyword.filter(|value| !value.is_empty()),
        category_id: category_id
            .map(|raw| parse_identifier(raw, CATEGORY_ID, |id| CategoryId::new(id)))
            .transpose()?,
        min_price,
        max_price,
        condition: condition
            .map(|raw| parse_condition(raw, CONDITION))
            .transpose()?,
        seller_id: seller_id
            .map(|raw| parse_identifier(raw, SELLER_ID, |id| UserId::new(id)))
            .transpose()?,
    })
}

/// Search listings.
#[utoipa::path(
    get,
    path = "/api/v1/product.search",
    params(ProductSearchParams),
    responses(
        (status = 200, description = "Matching listings, newest first", body = [ProductPayload]),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "productSearch"
)]
#[get("/product.search")]
pub async fn search_products(
    state: web::Data<HttpState>,
    params: web::Query<ProductSearchParams>,
) -> ApiResult<web::Json<Vec<ProductPayload>>> {
    let criteria = parse_search_params(params.into_inner())?;
    let products = state.products_query.search(criteria).await?;
    Ok(web::Json(products.iter().map(ProductPayload::from).collect()))
}

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductLookupParams {
    pub product_id: Option<String>,
}

/// Fetch one listing.
#[utoipa::path(
    get,
    path = "/api/v1/product.get",
    params(ProductLookupParams),
    responses(
        (status = 200, description = "Listing", body = ProductPayload),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "productGet"
)]
#[get("/product.get")]
pub async fn get_product(
    state: web::Data<HttpState>,
    params: web::Query<ProductLookupParams>,
) -> ApiResult<web::Json<ProductPayload>> {
    let raw = require(params.into_inner().product_id, PRODUCT_ID)?;
    let product_id = parse_identifier(raw, PRODUCT_ID, |id| ProductId::new(id))?;
    let product = state.products_query.get(&product_id).await?;
    Ok(web::Json(ProductPayload::from(&product)))
}

/// Request body for `product.create`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductBody {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Whole yen; negative values are rejected.
    pub price: Option<i64>,
    pub condition: Option<String>,
    pub seller_id: Option<String>,
    pub category_id: Option<String>,
    pub images: Option<Vec<String>>,
}

fn parse_create_body(body: CreateProductBody) -> ApiResult<CreateProductRequest> {
    Ok(CreateProductRequest {
        title: require(body.title, FieldName::new("title"))?,
        description: require(body.description, FieldName::new("description"))?,
        price: require(body.price, FieldName::new("price"))?,
        condition: parse_condition(require(body.condition, CONDITION)?, CONDITION)?,
        seller_id: parse_identifier(require(body.seller_id, SELLER_ID)?, SELLER_ID, |id| {
            UserId::new(id)
        })?,
        category_id: parse_identifier(require(body.category_id, CATEGORY_ID)?, CATEGORY_ID, |id| {
            CategoryId::new(id)
        })?,
        images: require(body.images, FieldName::new("images"))?,
    })
}

/// List a new product.
#[utoipa::path(
    post,
    path = "/api/v1/product.create",
    request_body = CreateProductBody,
    responses(
        (status = 200, description = "Created listing", body = ProductPayload),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "productCreate"
)]
#[post("/product.create")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<CreateProductBody>,
) -> ApiResult<web::Json<ProductPayload>> {
    let request = parse_create_body(payload.into_inner())?;
    let product = state.products.create(request).await?;
    Ok(web::Json(ProductPayload::from(&product)))
}

/// Request body for `product.purchase`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseBody {
    pub product_id: Option<String>,
    pub buyer_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub success: bool,
    /// False when the sale went through but the loyalty stamp could not be
    /// credited.
    pub stamp_awarded: bool,
}

/// Buy a listing and credit the buyer one loyalty stamp.
#[utoipa::path(
    post,
    path = "/api/v1/product.purchase",
    request_body = PurchaseBody,
    responses(
        (status = 200, description = "Purchase completed", body = PurchaseResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Buyer is the seller", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Listing is no longer available", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "productPurchase"
)]
#[post("/product.purchase")]
pub async fn purchase_product(
    state: web::Data<HttpState>,
    payload: web::Json<PurchaseBody>,
) -> ApiResult<web::Json<PurchaseResponse>> {
    let PurchaseBody {
        product_id,
        buyer_id,
    } = payload.into_inner();
    let product_id = parse_identifier(require(product_id, PRODUCT_ID)?, PRODUCT_ID, |id| {
        ProductId::new(id)
    })?;
    let buyer = FieldName::new("buyerId");
    let buyer_id = parse_identifier(require(buyer_id, buyer)?, buyer, |id| UserId::new(id))?;

    let outcome = state.checkout.purchase(&product_id, &buyer_id).await?;
    Ok(web::Json(PurchaseResponse {
        success: true,
        stamp_awarded: outcome.stamp_awarded,
    }))
}

/// Request body for `product.reserve`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReserveBody {
    pub product_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Hold a listing for a prospective buyer.
#[utoipa::path(
    post,
    path = "/api/v1/product.reserve",
    request_body = ReserveBody,
    responses(
        (status = 200, description = "Listing reserved", body = SuccessResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 403, description = "Caller is the seller", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Listing is no longer available", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "productReserve"
)]
#[post("/product.reserve")]
pub async fn reserve_product(
    state: web::Data<HttpState>,
    payload: web::Json<ReserveBody>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let ReserveBody {
        product_id,
        user_id,
    } = payload.into_inner();
    let product_id = parse_identifier(require(product_id, PRODUCT_ID)?, PRODUCT_ID, |id| {
        ProductId::new(id)
    })?;
    let user = FieldName::new("userId");
    let user_id = parse_identifier(require(user_id, user)?, user, |id| UserId::new(id))?;

    state.products.reserve(&product_id, &user_id).await?;
    Ok(web::Json(SuccessResponse { success: true }))
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
