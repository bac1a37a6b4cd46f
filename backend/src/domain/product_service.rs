//! Product listing domain services.
//!
//! Implements the product driving ports. Status changes are written with a
//! compare-and-swap on the previous status so concurrent buyers cannot both
//! succeed.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    CreateProductRequest, ProductCommand, ProductQuery, ProductRepository, ProductRepositoryError,
};
use crate::domain::{
    Error, Product, ProductDraft, ProductId, ProductSearchCriteria, ProductStatus,
    ProductTransitionError, ProductValidationError, SearchCriteriaError, UserId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Sell,
    Reserve,
}

impl Transition {
    fn apply(
        self,
        product: &mut Product,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), ProductTransitionError> {
        match self {
            Transition::Sell => product.mark_as_sold(now),
            Transition::Reserve => product.reserve(now),
        }
    }

    fn self_dealing_message(self) -> &'static str {
        match self {
            Transition::Sell => "sellers cannot purchase their own listing",
            Transition::Reserve => "sellers cannot reserve their own listing",
        }
    }
}

pub(crate) fn product_not_found(product_id: &ProductId) -> Error {
    Error::not_found(format!("product {product_id} not found")).with_details(json!({
        "productId": product_id.as_str(),
        "code": "product_not_found",
    }))
}

fn product_not_available(product_id: &ProductId, status: ProductStatus) -> Error {
    Error::conflict(format!("product {product_id} is not available")).with_details(json!({
        "productId": product_id.as_str(),
        "status": status.as_str(),
        "code": "product_not_available",
    }))
}

fn self_purchase_denied(product_id: &ProductId, transition: Transition) -> Error {
    Error::forbidden(transition.self_dealing_message()).with_details(json!({
        "productId": product_id.as_str(),
        "code": "self_purchase_denied",
    }))
}

fn map_validation_error(error: ProductValidationError) -> Error {
    let (field, code) = match &error {
        ProductValidationError::EmptyTitle => ("title", "empty_field"),
        ProductValidationError::EmptyDescription => ("description", "empty_field"),
        ProductValidationError::NegativePrice { .. } => ("price", "negative_price"),
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": code,
    }))
}

fn map_criteria_error(error: SearchCriteriaError) -> Error {
    match error {
        SearchCriteriaError::InvertedPriceRange { min, max } => {
            Error::invalid_request(error.to_string()).with_details(json!({
                "field": "minPrice",
                "minPrice": min,
                "maxPrice": max,
                "code": "invalid_price_range",
            }))
        }
    }
}

fn map_repository_error(error: ProductRepositoryError, product_id: &ProductId) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
        ProductRepositoryError::StatusConflict { actual, .. } => {
            product_not_available(product_id, actual)
        }
        ProductRepositoryError::Missing { .. } => product_not_found(product_id),
    }
}

/// Product service implementing the listing driving ports.
#[derive(Clone)]
pub struct ProductService<R> {
    product_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ProductService<R> {
    /// Create a new service with the product repository and a clock.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use freemarket::domain::ProductService;
    /// use freemarket::outbound::memory::InMemoryProductRepository;
    ///
    /// let service = ProductService::new(
    ///     Arc::new(InMemoryProductRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(product_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            product_repo,
            clock,
        }
    }
}

impl<R> ProductService<R>
where
    R: ProductRepository,
{
    async fn load(&self, product_id: &ProductId) -> Result<Product, Error> {
        self.product_repo
            .find_by_id(product_id)
            .await
            .map_err(|err| map_repository_error(err, product_id))?
            .ok_or_else(|| product_not_found(product_id))
    }

    async fn transition(
        &self,
        product_id: &ProductId,
        user_id: &UserId,
        transition: Transition,
    ) -> Result<Product, Error> {
        let mut product = self.load(product_id).await?;
        if !product.is_available() {
            return Err(product_not_available(product_id, product.status()));
        }
        if product.is_listed_by(user_id) {
            return Err(self_purchase_denied(product_id, transition));
        }

        transition
            .apply(&mut product, self.clock.utc())
            .map_err(|ProductTransitionError::NotAvailable { status }| {
                product_not_available(product_id, status)
            })?;
        self.product_repo
            .save_if_status(&product, ProductStatus::Available)
            .await
            .map_err(|err| map_repository_error(err, product_id))?;

        info!(
            product_id = %product_id,
            user_id = %user_id,
            status = %product.status(),
            "product status changed"
        );
        Ok(product)
    }
}

#[async_trait]
impl<R> ProductQuery for ProductService<R>
where
    R: ProductRepository,
{
    async fn search(&self, criteria: ProductSearchCriteria) -> Result<Vec<Product>, Error> {
        criteria.validate().map_err(map_criteria_error)?;
        self.product_repo
            .find_by_criteria(&criteria)
            .await
            .map_err(|err| match err {
                ProductRepositoryError::Connection { message } => Error::service_unavailable(
                    format!("product repository unavailable: {message}"),
                ),
                other => Error::internal(format!("product repository error: {other}")),
            })
    }

    async fn get(&self, product_id: &ProductId) -> Result<Product, Error> {
        self.load(product_id).await
    }
}

#[async_trait]
impl<R> ProductCommand for ProductService<R>
where
    R: ProductRepository,
{
    async fn create(&self, request: CreateProductRequest) -> Result<Product, Error> {
        let CreateProductRequest {
            title,
            description,
            price,
            condition,
            seller_id,
            category_id,
            images,
        } = request;
        let product = Product::new(
            ProductId::random(),
            ProductDraft {
                title,
                description,
                price,
                condition,
                seller_id,
                category_id,
                images,
            },
            self.clock.utc(),
        )
        .map_err(map_validation_error)?;

        self.product_repo
            .save(&product)
            .await
            .map_err(|err| map_repository_error(err, product.id()))?;

        info!(
            product_id = %product.id(),
            seller_id = %product.seller_id(),
            "product listed"
        );
        Ok(product)
    }

    async fn purchase(&self, product_id: &ProductId, buyer_id: &UserId) -> Result<Product, Error> {
        self.transition(product_id, buyer_id, Transition::Sell).await
    }

    async fn reserve(&self, product_id: &ProductId, user_id: &UserId) -> Result<Product, Error> {
        self.transition(product_id, user_id, Transition::Reserve)
            .await
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
