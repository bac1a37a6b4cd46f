//! In-memory user store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

fn poisoned<T>(_: T) -> UserRepositoryError {
    UserRepositoryError::query("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().map_err(poisoned)?.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        self.users
            .write()
            .map_err(poisoned)?
            .insert(user.id().clone(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::UserProfile;
    use crate::domain::test_fixtures::{fixture_timestamp, user};

    #[tokio::test]
    async fn save_replaces_existing_profile() {
        let repo = InMemoryUserRepository::default();
        let mut stored = User::new(
            user("user1"),
            UserProfile {
                username: "tanaka".to_owned(),
                email: "tanaka@example.com".to_owned(),
                display_name: "Tanaka".to_owned(),
                avatar: None,
                rating: 4.8,
            },
            fixture_timestamp(),
        )
        .expect("valid user");
        repo.save(&stored).await.expect("save");

        stored
            .update_profile("Tanaka Taro", None, fixture_timestamp())
            .expect("update");
        repo.save(&stored).await.expect("save");

        let found = repo
            .find_by_id(&user("user1"))
            .await
            .expect("lookup")
            .expect("stored");
        assert_eq!(found.display_name(), "Tanaka Taro");
        assert!(repo.find_by_id(&user("user9")).await.expect("lookup").is_none());
    }
}
