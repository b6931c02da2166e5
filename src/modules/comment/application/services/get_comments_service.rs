use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::{
    incoming::use_cases::{GetCommentsError, GetCommentsUseCase},
    outgoing::{CommentQuery, CommentQueryError},
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentResult>, GetCommentsError> {
        self.query
            .list_comments(title_id, review_id, page)
            .await
            .map_err(|e| match e {
                CommentQueryError::ReviewNotFound => GetCommentsError::ReviewNotFound,
                other => GetCommentsError::QueryError(other.to_string()),
            })
    }
}
