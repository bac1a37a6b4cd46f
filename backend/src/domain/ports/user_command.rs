//! Driving port for editing user profiles.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Request to change a user's public profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    pub user_id: UserId,
    pub display_name: String,
    /// New avatar URL; `None` keeps the current avatar.
    pub avatar: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Apply the update and return the stored profile.
    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<User, Error>;
}
