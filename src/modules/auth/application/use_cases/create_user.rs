use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::{
    check_bio, check_name, normalize_email, normalize_username, Role, User, UserFieldError,
};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    data: CreateUserData,
}

impl CreateUserCommand {
    pub fn new(
        username: String,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
        bio: Option<String>,
        role: Option<Role>,
    ) -> Result<Self, UserFieldError> {
        Ok(Self {
            data: CreateUserData {
                username: normalize_username(&username)?,
                email: normalize_email(&email)?,
                first_name: check_name("first_name", first_name.as_deref().unwrap_or(""))?,
                last_name: check_name("last_name", last_name.as_deref().unwrap_or(""))?,
                bio: check_bio(bio.as_deref().unwrap_or(""))?,
                role: role.unwrap_or_default(),
                is_staff: false,
            },
        })
    }

    pub fn username(&self) -> &str {
        &self.data.username
    }

    pub fn email(&self) -> &str {
        &self.data.email
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("A user with that username already exists.")]
    UsernameAlreadyExists,

    #[error("A user with that email already exists.")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl CreateUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl ICreateUserUseCase for CreateUserUseCase {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        let repo_err = |e: String| CreateUserError::RepositoryError(e);

        if self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| repo_err(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::UsernameAlreadyExists);
        }

        if self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| repo_err(e.to_string()))?
            .is_some()
        {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let user = self
            .repository
            .create_user(command.data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => CreateUserError::UsernameAlreadyExists,
                UserRepositoryError::EmailTaken => CreateUserError::EmailAlreadyExists,
                other => repo_err(other.to_string()),
            })?;

        info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }
}
