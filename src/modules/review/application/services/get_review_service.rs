use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::ports::{
    incoming::use_cases::{GetReviewError, GetReviewUseCase},
    outgoing::ReviewQuery,
};

#[derive(Debug, Clone)]
pub struct GetReviewService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReviewService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReviewUseCase for GetReviewService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self, title_id: Uuid, review_id: Uuid) -> Result<ReviewResult, GetReviewError> {
        self.query
            .find_review(title_id, review_id)
            .await
            .map_err(|e| GetReviewError::QueryError(e.to_string()))?
            .ok_or(GetReviewError::NotFound)
    }
}
