use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::review::application::domain::entities::{
    ReviewFieldError, ReviewResult, ReviewText, Score,
};

//
// ──────────────────────────────────────────────────────────
// Create Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateReviewCommand {
    title_id: Uuid,
    author: UserId,
    text: ReviewText,
    score: Option<Score>,
}

impl CreateReviewCommand {
    pub fn new(
        title_id: Uuid,
        author: UserId,
        text: &str,
        score: Option<i16>,
    ) -> Result<Self, ReviewFieldError> {
        Ok(Self {
            title_id,
            author,
            text: ReviewText::new(text)?,
            score: score.map(Score::new).transpose()?,
        })
    }

    pub fn title_id(&self) -> Uuid {
        self.title_id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateReviewError {
    #[error("Title not found")]
    TitleNotFound,

    #[error("You have already reviewed this title")]
    AlreadyReviewed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(&self, command: CreateReviewCommand)
        -> Result<ReviewResult, CreateReviewError>;
}
