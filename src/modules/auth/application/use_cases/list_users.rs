use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserListFilter, UserQuery};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<User>, ListUsersError>;
}

#[derive(Clone)]
pub struct ListUsersUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
}

impl ListUsersUseCase {
    pub fn new(query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IListUsersUseCase for ListUsersUseCase {
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<User>, ListUsersError> {
        let filter = UserListFilter {
            search: filter
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };

        self.query
            .list(filter, page)
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))
    }
}
