use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::Actor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Only the author, a moderator or an admin may delete this review")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<(), DeleteReviewError>;
}
