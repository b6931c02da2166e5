use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::Actor;
use crate::comment::application::domain::entities::{CommentFieldError, CommentResult, CommentText};

/// PUT and PATCH both carry the text, the only writable field.
#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    text: CommentText,
}

impl UpdateCommentCommand {
    pub fn new(text: &str) -> Result<Self, CommentFieldError> {
        Ok(Self {
            text: CommentText::new(text)?,
        })
    }

    pub fn into_text(self) -> String {
        self.text.into_inner()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Only the author, a moderator or an admin may change this comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError>;
}
