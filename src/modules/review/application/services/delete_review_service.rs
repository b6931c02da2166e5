use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{authorize, Actor, Operation};
use crate::review::application::ports::{
    incoming::use_cases::{DeleteReviewError, DeleteReviewUseCase},
    outgoing::{ReviewQuery, ReviewRepository, ReviewRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteReviewUseCase for DeleteReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<(), DeleteReviewError> {
        let current = self
            .query
            .find_review(title_id, review_id)
            .await
            .map_err(|e| DeleteReviewError::RepositoryError(e.to_string()))?
            .ok_or(DeleteReviewError::NotFound)?;

        if !authorize(Operation::DeleteReview, Some(actor), Some(current.author_id)).is_allowed() {
            return Err(DeleteReviewError::Forbidden);
        }

        self.repository
            .delete_review(title_id, review_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::ReviewNotFound | ReviewRepositoryError::TitleNotFound => {
                    DeleteReviewError::NotFound
                }
                other => DeleteReviewError::RepositoryError(other.to_string()),
            })
    }
}
