use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTitleError {
    #[error("Title not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetTitleUseCase: Send + Sync {
    async fn execute(&self, title_id: Uuid) -> Result<TitleResult, GetTitleError>;
}
