use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentResult;
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Review not found")]
    ReviewNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    async fn find_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentResult>, CommentQueryError>;

    /// Oldest first; ties broken by id. Ids are random v4, so among comments
    /// with the same `pub_date` the order is stable but not insertion order.
    async fn list_comments(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentResult>, CommentQueryError>;
}
