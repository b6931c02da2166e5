use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Looks a user up by username (admin routes) or by id (`/users/me/`).
#[async_trait]
pub trait IGetUserUseCase: Send + Sync {
    async fn by_username(&self, username: &str) -> Result<User, GetUserError>;
    async fn by_id(&self, user_id: UserId) -> Result<User, GetUserError>;
}

#[derive(Clone)]
pub struct GetUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl GetUserUseCase {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IGetUserUseCase for GetUserUseCase {
    async fn by_username(&self, username: &str) -> Result<User, GetUserError> {
        self.query
            .find_by_username(username)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?
            .ok_or(GetUserError::UserNotFound)
    }

    async fn by_id(&self, user_id: UserId) -> Result<User, GetUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?
            .ok_or(GetUserError::UserNotFound)
    }
}
