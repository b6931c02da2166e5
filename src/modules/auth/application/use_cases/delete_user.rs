use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<(), DeleteUserError>;
}

#[derive(Clone)]
pub struct DeleteUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl DeleteUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IDeleteUserUseCase for DeleteUserUseCase {
    async fn execute(&self, username: &str) -> Result<(), DeleteUserError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::UserNotFound)?;

        self.repository
            .delete_user(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, username = %user.username, "User deleted");
        Ok(())
    }
}
