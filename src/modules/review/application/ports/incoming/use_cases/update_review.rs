use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::Actor;
use crate::review::application::domain::entities::{
    ReviewFieldError, ReviewResult, ReviewText, Score,
};
use crate::review::application::ports::outgoing::UpdateReviewData;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Update Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateReviewCommand {
    text: Option<ReviewText>,
    score: PatchField<Score>,
}

impl UpdateReviewCommand {
    /// PUT: the text is required and a missing score clears it.
    pub fn replace(text: &str, score: Option<i16>) -> Result<Self, ReviewFieldError> {
        Ok(Self {
            text: Some(ReviewText::new(text)?),
            score: PatchField::from(score.map(Score::new).transpose()?),
        })
    }

    /// PATCH: omitted fields keep their stored value.
    pub fn patch(text: Option<&str>, score: PatchField<i16>) -> Result<Self, ReviewFieldError> {
        let score = match score {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(Score::new(v)?),
        };
        Ok(Self {
            text: text.map(ReviewText::new).transpose()?,
            score,
        })
    }

    pub fn into_data(self) -> UpdateReviewData {
        UpdateReviewData {
            text: self.text.map(ReviewText::into_inner),
            score: self.score.map(|s| s.value()).into_change(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Only the author, a moderator or an admin may change this review")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        title_id: Uuid,
        review_id: Uuid,
        command: UpdateReviewCommand,
    ) -> Result<ReviewResult, UpdateReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_without_score_clears_it() {
        let data = UpdateReviewCommand::replace("new text", None)
            .unwrap()
            .into_data();

        assert_eq!(data.text.as_deref(), Some("new text"));
        assert_eq!(data.score, Some(None));
    }

    #[test]
    fn patch_without_score_keeps_it() {
        let data = UpdateReviewCommand::patch(Some("edited"), PatchField::Unset)
            .unwrap()
            .into_data();

        assert_eq!(data.score, None);
    }

    #[test]
    fn patch_rejects_out_of_range_score() {
        let result = UpdateReviewCommand::patch(None, PatchField::Value(42));
        assert!(matches!(result, Err(ReviewFieldError::ScoreOutOfRange)));
    }

    #[test]
    fn patch_rejects_blank_text() {
        let result = UpdateReviewCommand::patch(Some("  "), PatchField::Unset);
        assert!(matches!(result, Err(ReviewFieldError::EmptyText)));
    }
}
