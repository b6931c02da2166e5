// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    /// Case-insensitive substring of the username.
    pub search: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    /// Ordered by username.
    async fn list(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<User>, UserQueryError>;
}
