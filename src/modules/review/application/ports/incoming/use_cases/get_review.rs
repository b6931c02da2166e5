use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::ReviewResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetReviewUseCase: Send + Sync {
    async fn execute(&self, title_id: Uuid, review_id: Uuid)
        -> Result<ReviewResult, GetReviewError>;
}
