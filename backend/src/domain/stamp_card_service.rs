//! Stamp card domain services.
//!
//! Cards are created lazily on first read or first purchase. Mutations are
//! written with optimistic concurrency and replayed against a fresh copy when
//! another writer got there first.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    StampCardCommand, StampCardQuery, StampCardRepository, StampCardRepositoryError,
};
use crate::domain::{Error, StampCard, StampCardError, StampCardId, UserId};

/// Attempts made before a contended write is reported as a conflict.
const MAX_WRITE_ATTEMPTS: usize = 3;

fn map_repository_error(error: StampCardRepositoryError) -> Error {
    match error {
        StampCardRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("stamp card repository unavailable: {message}"))
        }
        StampCardRepositoryError::Query { message } => {
            Error::internal(format!("stamp card repository error: {message}"))
        }
        StampCardRepositoryError::RevisionMismatch { expected, actual } => {
            Error::conflict("revision mismatch").with_details(json!({
                "expectedRevision": expected,
                "actualRevision": actual,
                "code": "revision_mismatch",
            }))
        }
        StampCardRepositoryError::Missing { user_id } => stamp_card_not_found(&user_id),
    }
}

fn stamp_card_not_found(user_id: &str) -> Error {
    Error::not_found(format!("no stamp card for user {user_id}")).with_details(json!({
        "userId": user_id,
        "code": "stamp_card_not_found",
    }))
}

fn map_rule_error(error: StampCardError) -> Error {
    match error {
        StampCardError::InsufficientStamps { stamps, required } => {
            Error::conflict(error.to_string()).with_details(json!({
                "stamps": stamps,
                "required": required,
                "code": "insufficient_stamps",
            }))
        }
    }
}

/// Stamp card service implementing the loyalty driving ports.
#[derive(Clone)]
pub struct StampCardService<R> {
    card_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> StampCardService<R> {
    /// Create a new service with the card repository and a clock.
    pub fn new(card_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { card_repo, clock }
    }
}

impl<R> StampCardService<R>
where
    R: StampCardRepository,
{
    async fn find_or_create(&self, user_id: &UserId) -> Result<StampCard, Error> {
        let candidate = StampCard::new(StampCardId::random(), user_id.clone(), self.clock.utc());
        self.card_repo
            .find_or_create(candidate)
            .await
            .map_err(map_repository_error)
    }

    /// Apply `mutate` to the latest stored card and persist it, retrying on
    /// revision mismatches.
    async fn write<F>(&self, mut card: StampCard, mutate: F) -> Result<StampCard, Error>
    where
        F: Fn(&mut StampCard) -> Result<(), Error> + Send + Sync,
    {
        let mut attempt = 1;
        loop {
            let expected = card.revision();
            mutate(&mut card)?;
            match self.card_repo.save(&card, expected).await {
                Ok(()) => return Ok(card),
                Err(StampCardRepositoryError::RevisionMismatch { .. })
                    if attempt < MAX_WRITE_ATTEMPTS =>
                {
                    debug!(
                        user_id = %card.user_id(),
                        attempt,
                        "stamp card write raced; reloading"
                    );
                    attempt += 1;
                    card = self
                        .card_repo
                        .find_by_user_id(card.user_id())
                        .await
                        .map_err(map_repository_error)?
                        .ok_or_else(|| stamp_card_not_found(card.user_id().as_str()))?;
                }
                Err(err) => return Err(map_repository_error(err)),
            }
        }
    }
}

#[async_trait]
impl<R> StampCardQuery for StampCardService<R>
where
    R: StampCardRepository,
{
    async fn get(&self, user_id: &UserId) -> Result<StampCard, Error> {
        self.find_or_create(user_id).await
    }
}

#[async_trait]
impl<R> StampCardCommand for StampCardService<R>
where
    R: StampCardRepository,
{
    async fn add_stamp(&self, user_id: &UserId) -> Result<StampCard, Error> {
        let card = self.find_or_create(user_id).await?;
        let now = self.clock.utc();
        let card = self
            .write(card, |card| {
                card.add_stamp(now);
                Ok(())
            })
            .await?;
        info!(
            user_id = %user_id,
            stamps = card.stamps(),
            total_purchases = card.total_purchases(),
            "stamp added"
        );
        Ok(card)
    }

    async fn use_reward(&self, user_id: &UserId) -> Result<StampCard, Error> {
        let card = self
            .card_repo
            .find_by_user_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| stamp_card_not_found(user_id.as_str()))?;
        let now = self.clock.utc();
        let card = self
            .write(card, |card| card.use_reward(now).map_err(map_rule_error))
            .await?;
        info!(user_id = %user_id, stamps = card.stamps(), "reward redeemed");
        Ok(card)
    }
}

#[cfg(test)]
#[path = "stamp_card_service_tests.rs"]
mod tests;
