use async_trait::async_trait;

use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::{
    incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
    outgoing::{CommentRepository, CommentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCommentUseCase for CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        self.repository
            .create_comment(command.into_data())
            .await
            .map_err(|e| match e {
                CommentRepositoryError::ReviewNotFound => CreateCommentError::ReviewNotFound,
                other => CreateCommentError::RepositoryError(other.to_string()),
            })
    }
}
