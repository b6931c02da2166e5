use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::{
    check_bio, check_name, User, UserFieldError, UserId,
};
use crate::auth::application::ports::outgoing::{
    UpdateUserData, UserQuery, UserRepository, UserRepositoryError,
};

/// Self-service changes. Username, email and role are not part of it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
}

impl UpdateProfileCommand {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        bio: Option<String>,
    ) -> Result<Self, UserFieldError> {
        Ok(Self {
            first_name: first_name
                .as_deref()
                .map(|v| check_name("first_name", v))
                .transpose()?,
            last_name: last_name
                .as_deref()
                .map(|v| check_name("last_name", v))
                .transpose()?,
            bio: bio.as_deref().map(check_bio).transpose()?,
        })
    }

    fn into_update(self) -> UpdateUserData {
        UpdateUserData {
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            ..UpdateUserData::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UpdateProfileError>;
}

#[derive(Clone)]
pub struct UpdateProfileUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UpdateProfileUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IUpdateProfileUseCase for UpdateProfileUseCase {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UpdateProfileError> {
        let data = command.into_update();

        if data.is_empty() {
            return self
                .query
                .find_by_id(user_id)
                .await
                .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
                .ok_or(UpdateProfileError::UserNotFound);
        }

        let user = self
            .repository
            .update_user(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }
}
