//! Marketplace user profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Validation errors returned by user constructors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// Registration fields for a user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: Option<String>,
    /// Average seller rating on the 1 to 5 review scale.
    pub rating: f64,
}

/// A buyer or seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    username: String,
    email: String,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    rating: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn require_display_name(value: &str) -> Result<String, UserValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UserValidationError::EmptyDisplayName);
    }
    Ok(trimmed.to_owned())
}

impl User {
    /// Build a profile, validating the username and display name.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use freemarket::domain::{User, UserId, UserProfile};
    ///
    /// let user = User::new(
    ///     UserId::new("user1").unwrap(),
    ///     UserProfile {
    ///         username: "tanaka".into(),
    ///         email: "tanaka@example.com".into(),
    ///         display_name: "Tanaka".into(),
    ///         avatar: None,
    ///         rating: 4.8,
    ///     },
    ///     Utc::now(),
    /// )
    /// .unwrap();
    /// assert_eq!(user.display_name(), "Tanaka");
    /// ```
    pub fn new(
        id: UserId,
        profile: UserProfile,
        now: DateTime<Utc>,
    ) -> Result<Self, UserValidationError> {
        let UserProfile {
            username,
            email,
            display_name,
            avatar,
            rating,
        } = profile;
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self {
            id,
            username,
            email,
            display_name: require_display_name(&display_name)?,
            avatar,
            rating,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Change the display name and, when supplied, the avatar.
    ///
    /// A `None` avatar keeps the current one.
    pub fn update_profile(
        &mut self,
        display_name: &str,
        avatar: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), UserValidationError> {
        self.display_name = require_display_name(display_name)?;
        if let Some(avatar) = avatar {
            self.avatar = Some(avatar);
        }
        self.updated_at = now;
        Ok(())
    }
}
