use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{authorize, Actor, Operation};
use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::ports::{
    incoming::use_cases::{UpdateReviewCommand, UpdateReviewError, UpdateReviewUseCase},
    outgoing::{ReviewQuery, ReviewRepository, ReviewRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateReviewUseCase for UpdateReviewService<Q, R>
where
    Q: ReviewQuery + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        title_id: Uuid,
        review_id: Uuid,
        command: UpdateReviewCommand,
    ) -> Result<ReviewResult, UpdateReviewError> {
        let current = self
            .query
            .find_review(title_id, review_id)
            .await
            .map_err(|e| UpdateReviewError::RepositoryError(e.to_string()))?
            .ok_or(UpdateReviewError::NotFound)?;

        if !authorize(Operation::UpdateReview, Some(actor), Some(current.author_id)).is_allowed() {
            return Err(UpdateReviewError::Forbidden);
        }

        self.repository
            .update_review(title_id, review_id, command.into_data())
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::ReviewNotFound | ReviewRepositoryError::TitleNotFound => {
                    UpdateReviewError::NotFound
                }
                other => UpdateReviewError::RepositoryError(other.to_string()),
            })
    }
}
