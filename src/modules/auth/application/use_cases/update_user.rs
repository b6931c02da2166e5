use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::{
    check_bio, check_name, normalize_email, normalize_username, Role, User, UserFieldError,
};
use crate::auth::application::ports::outgoing::{
    UpdateUserData, UserQuery, UserRepository, UserRepositoryError,
};

/// Partial update issued by an administrator. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    data: UpdateUserData,
}

impl UpdateUserCommand {
    pub fn new(
        username: Option<String>,
        email: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        bio: Option<String>,
        role: Option<Role>,
    ) -> Result<Self, UserFieldError> {
        Ok(Self {
            data: UpdateUserData {
                username: username.as_deref().map(normalize_username).transpose()?,
                email: email.as_deref().map(normalize_email).transpose()?,
                first_name: first_name
                    .as_deref()
                    .map(|v| check_name("first_name", v))
                    .transpose()?,
                last_name: last_name
                    .as_deref()
                    .map(|v| check_name("last_name", v))
                    .transpose()?,
                bio: bio.as_deref().map(check_bio).transpose()?,
                role,
            },
        })
    }

    pub fn data(&self) -> &UpdateUserData {
        &self.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("A user with that username already exists.")]
    UsernameAlreadyExists,

    #[error("A user with that email already exists.")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            UserRepositoryError::UsernameTaken => UpdateUserError::UsernameAlreadyExists,
            UserRepositoryError::EmailTaken => UpdateUserError::EmailAlreadyExists,
            UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        username: &str,
        command: UpdateUserCommand,
    ) -> Result<User, UpdateUserError>;
}

#[derive(Clone)]
pub struct UpdateUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UpdateUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self { query, repository }
    }

    fn query_err(e: impl ToString) -> UpdateUserError {
        UpdateUserError::RepositoryError(e.to_string())
    }
}

#[async_trait]
impl IUpdateUserUseCase for UpdateUserUseCase {
    async fn execute(
        &self,
        username: &str,
        command: UpdateUserCommand,
    ) -> Result<User, UpdateUserError> {
        let target = self
            .query
            .find_by_username(username)
            .await
            .map_err(Self::query_err)?
            .ok_or(UpdateUserError::UserNotFound)?;

        let data = command.data;

        if let Some(new_username) = data.username.as_deref() {
            let clash = self
                .query
                .find_by_username(new_username)
                .await
                .map_err(Self::query_err)?;
            if clash.is_some_and(|other| other.id != target.id) {
                return Err(UpdateUserError::UsernameAlreadyExists);
            }
        }

        if let Some(new_email) = data.email.as_deref() {
            let clash = self
                .query
                .find_by_email(new_email)
                .await
                .map_err(Self::query_err)?;
            if clash.is_some_and(|other| other.id != target.id) {
                return Err(UpdateUserError::EmailAlreadyExists);
            }
        }

        if data.is_empty() {
            return Ok(target);
        }

        let updated = self.repository.update_user(target.id, data).await?;

        info!(user_id = %updated.id, "User updated by administrator");
        Ok(updated)
    }
}
