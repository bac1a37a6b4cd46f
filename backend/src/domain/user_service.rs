//! User profile domain services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    UpdateProfileRequest, UserCommand, UserQuery, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, User, UserId, UserValidationError};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn user_not_found(user_id: &UserId) -> Error {
    Error::not_found(format!("user {user_id} not found")).with_details(json!({
        "userId": user_id.as_str(),
        "code": "user_not_found",
    }))
}

fn map_validation_error(error: UserValidationError) -> Error {
    let field = match error {
        UserValidationError::EmptyUsername => "username",
        UserValidationError::EmptyDisplayName => "displayName",
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "code": "empty_field",
    }))
}

/// User service implementing the profile driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserService<R> {
    pub fn new(user_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    async fn load(&self, user_id: &UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(user_id))
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get(&self, user_id: &UserId) -> Result<User, Error> {
        self.load(user_id).await
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<User, Error> {
        let UpdateProfileRequest {
            user_id,
            display_name,
            avatar,
        } = request;
        let mut user = self.load(&user_id).await?;
        user.update_profile(&display_name, avatar, self.clock.utc())
            .map_err(map_validation_error)?;
        self.user_repo
            .save(&user)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user_id, "profile updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::test_fixtures::{fixture_clock, fixture_timestamp, user};
    use crate::domain::ports::MockUserRepository;
    use crate::domain::{ErrorCode, UserProfile};
    use chrono::Duration;

    fn stored_user() -> User {
        User::new(
            user("user1"),
            UserProfile {
                username: "tanaka".to_owned(),
                email: "tanaka@example.com".to_owned(),
                display_name: "Tanaka".to_owned(),
                avatar: Some("/avatars/tanaka.png".to_owned()),
                rating: 4.8,
            },
            fixture_timestamp() - Duration::days(30),
        )
        .expect("valid user")
    }

    fn service(repo: MockUserRepository) -> UserService<MockUserRepository> {
        UserService::new(Arc::new(repo), fixture_clock())
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().return_once(|_| Ok(None));

        let error = service(repo)
            .get(&user("ghost"))
            .await
            .expect_err("missing user");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(
            error.details().and_then(|d| d.get("code")).and_then(|c| c.as_str()),
            Some("user_not_found")
        );
    }

    #[tokio::test]
    async fn update_profile_persists_new_display_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(stored_user())));
        repo.expect_save()
            .withf(|saved| saved.display_name() == "Tanaka Taro")
            .times(1)
            .return_once(|_| Ok(()));

        let updated = service(repo)
            .update_profile(UpdateProfileRequest {
                user_id: user("user1"),
                display_name: "Tanaka Taro".to_owned(),
                avatar: None,
            })
            .await
            .expect("profile updated");

        assert_eq!(updated.avatar(), Some("/avatars/tanaka.png"));
        assert_eq!(updated.updated_at(), fixture_timestamp());
    }

    #[tokio::test]
    async fn update_profile_rejects_blank_display_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .return_once(|_| Ok(Some(stored_user())));
        repo.expect_save().times(0);

        let error = service(repo)
            .update_profile(UpdateProfileRequest {
                user_id: user("user1"),
                display_name: "   ".to_owned(),
                avatar: None,
            })
            .await
            .expect_err("blank name");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.details().expect("details")["field"], "displayName");
    }
}
