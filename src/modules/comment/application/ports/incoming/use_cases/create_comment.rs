use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{CommentFieldError, CommentResult, CommentText};
use crate::comment::application::ports::outgoing::CreateCommentData;

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    title_id: Uuid,
    review_id: Uuid,
    author: UserId,
    text: CommentText,
}

impl CreateCommentCommand {
    pub fn new(
        title_id: Uuid,
        review_id: Uuid,
        author: UserId,
        text: &str,
    ) -> Result<Self, CommentFieldError> {
        Ok(Self {
            title_id,
            review_id,
            author,
            text: CommentText::new(text)?,
        })
    }

    pub fn into_data(self) -> CreateCommentData {
        CreateCommentData {
            title_id: self.title_id,
            review_id: self.review_id,
            author_id: self.author,
            text: self.text.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Review not found")]
    ReviewNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(&self, command: CreateCommentCommand)
        -> Result<CommentResult, CreateCommentError>;
}
