use async_trait::async_trait;

use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::ports::{
    incoming::use_cases::{CreateReviewCommand, CreateReviewError, CreateReviewUseCase},
    outgoing::{CreateReviewData, ReviewRepository, ReviewRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateReviewUseCase for CreateReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateReviewCommand,
    ) -> Result<ReviewResult, CreateReviewError> {
        let data = CreateReviewData {
            title_id: command.title_id(),
            author_id: command.author(),
            score: command.score().map(|s| s.value()),
            text: command.text().to_string(),
        };

        self.repository
            .create_review(data)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::TitleNotFound => CreateReviewError::TitleNotFound,
                ReviewRepositoryError::DuplicateReview => CreateReviewError::AlreadyReviewed,
                other => CreateReviewError::RepositoryError(other.to_string()),
            })
    }
}
