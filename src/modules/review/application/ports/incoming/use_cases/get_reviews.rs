use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::ReviewResult;
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetReviewsError {
    #[error("Title not found")]
    TitleNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetReviewsUseCase: Send + Sync {
    async fn execute(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ReviewResult>, GetReviewsError>;
}
