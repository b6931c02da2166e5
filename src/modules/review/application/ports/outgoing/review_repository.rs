use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::review::application::domain::entities::ReviewResult;

#[derive(Debug, Clone)]
pub struct CreateReviewData {
    pub title_id: Uuid,
    pub author_id: UserId,
    pub text: String,
    pub score: Option<i16>,
}

/// `None` keeps the stored value; `Some(None)` clears the score.
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewData {
    pub text: Option<String>,
    pub score: Option<Option<i16>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Title not found")]
    TitleNotFound,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("Author already reviewed this title")]
    DuplicateReview,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every write refreshes the owning title's rating before it commits.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create_review(&self, data: CreateReviewData)
        -> Result<ReviewResult, ReviewRepositoryError>;

    async fn update_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        data: UpdateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError>;

    async fn delete_review(&self, title_id: Uuid, review_id: Uuid)
        -> Result<(), ReviewRepositoryError>;
}
