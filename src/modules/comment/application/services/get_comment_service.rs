use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::{
    incoming::use_cases::{GetCommentError, GetCommentUseCase},
    outgoing::CommentQuery,
};

#[derive(Debug, Clone)]
pub struct GetCommentService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCommentService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentUseCase for GetCommentService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<CommentResult, GetCommentError> {
        self.query
            .find_comment(title_id, review_id, comment_id)
            .await
            .map_err(|e| GetCommentError::QueryError(e.to_string()))?
            .ok_or(GetCommentError::NotFound)
    }
}
