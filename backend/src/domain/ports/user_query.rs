//! Driving port for reading user profiles.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch a profile, or a not found error.
    async fn get(&self, user_id: &UserId) -> Result<User, Error>;
}
