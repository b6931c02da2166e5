use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const SCORE_MIN: i16 = 0;
pub const SCORE_MAX: i16 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewFieldError {
    #[error("score must be between 0 and 10")]
    ScoreOutOfRange,
    #[error("text must not be empty")]
    EmptyText,
}

impl ReviewFieldError {
    pub fn field(&self) -> &'static str {
        match self {
            ReviewFieldError::ScoreOutOfRange => "score",
            ReviewFieldError::EmptyText => "text",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Value objects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(i16);

impl Score {
    pub fn new(value: i16) -> Result<Self, ReviewFieldError> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
            return Err(ReviewFieldError::ScoreOutOfRange);
        }
        Ok(Score(value))
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewText(String);

impl ReviewText {
    pub fn new(raw: &str) -> Result<Self, ReviewFieldError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ReviewFieldError::EmptyText);
        }
        Ok(ReviewText(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Read model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewResult {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub title_id: Uuid,
    #[serde(skip_serializing)]
    pub author_id: UserId,
    /// Username of the author.
    pub author: String,
    pub text: String,
    pub score: Option<i16>,
    pub pub_date: DateTime<Utc>,
}
