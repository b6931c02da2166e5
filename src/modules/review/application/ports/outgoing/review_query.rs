use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::ReviewResult;
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Title not found")]
    TitleNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// `None` when the review does not exist or belongs to another title.
    async fn find_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewQueryError>;

    /// Ordered by pub_date, oldest first.
    async fn list_reviews(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ReviewResult>, ReviewQueryError>;
}
