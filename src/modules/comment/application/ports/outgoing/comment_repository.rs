use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::CommentResult;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub title_id: Uuid,
    pub review_id: Uuid,
    pub author_id: UserId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentRepositoryError {
    /// The review does not exist or belongs to another title.
    #[error("Review not found")]
    ReviewNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Comments are addressed through their title and review.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError>;

    async fn update_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        text: String,
    ) -> Result<CommentResult, CommentRepositoryError>;

    async fn delete_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), CommentRepositoryError>;
}
