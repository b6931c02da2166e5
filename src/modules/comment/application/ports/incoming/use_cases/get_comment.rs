use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<CommentResult, GetCommentError>;
}
