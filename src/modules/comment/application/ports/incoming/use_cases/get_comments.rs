use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentResult;
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Review not found")]
    ReviewNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentResult>, GetCommentsError>;
}
