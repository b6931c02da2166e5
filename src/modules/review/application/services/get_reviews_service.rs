use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::ports::{
    incoming::use_cases::{GetReviewsError, GetReviewsUseCase},
    outgoing::{ReviewQuery, ReviewQueryError},
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct GetReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReviewsUseCase for GetReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ReviewResult>, GetReviewsError> {
        self.query
            .list_reviews(title_id, page)
            .await
            .map_err(|e| match e {
                ReviewQueryError::TitleNotFound => GetReviewsError::TitleNotFound,
                other => GetReviewsError::QueryError(other.to_string()),
            })
    }
}
