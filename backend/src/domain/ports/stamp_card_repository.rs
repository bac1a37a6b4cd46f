//! Port for stamp card persistence.
//!
//! One card exists per user. Cards are created lazily through
//! [`StampCardRepository::find_or_create`], which must be atomic so
//! concurrent first purchases never produce two cards. Updates use optimistic
//! concurrency on [`StampCard::revision`].

use async_trait::async_trait;

use crate::domain::{StampCard, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by stamp card repository adapters.
    pub enum StampCardRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "stamp card repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "stamp card repository query failed: {message}",
        /// Optimistic concurrency check failed.
        RevisionMismatch { expected: u32, actual: u32 } =>
            "revision mismatch: expected {expected}, found {actual}",
        /// An update targeted a card that is not stored.
        Missing { user_id: String } =>
            "no stamp card stored for user {user_id}",
    }
}

/// Port for stamp card storage and retrieval.
///
/// # Revision Semantics
///
/// - New cards start at revision 1.
/// - Each mutation on the entity increments the revision.
/// - [`StampCardRepository::save`] only succeeds when the stored revision
///   equals `expected_revision`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StampCardRepository: Send + Sync {
    /// Fetch the card owned by `user_id`.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StampCard>, StampCardRepositoryError>;

    /// Return the stored card for the candidate's user, inserting `candidate`
    /// first when none exists. Lookup and insert happen atomically.
    async fn find_or_create(&self, candidate: StampCard) -> Result<StampCard, StampCardRepositoryError>;

    /// Replace the stored card when its revision equals `expected_revision`.
    ///
    /// The caller sets the new revision on `card` before calling.
    async fn save(
        &self,
        card: &StampCard,
        expected_revision: u32,
    ) -> Result<(), StampCardRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn revision_mismatch_error_formats_correctly() {
        let error = StampCardRepositoryError::revision_mismatch(2_u32, 5_u32);
        let message = error.to_string();

        assert!(message.contains("expected 2"));
        assert!(message.contains("found 5"));
    }
}
