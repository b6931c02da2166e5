use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentFieldError {
    #[error("text must not be empty")]
    EmptyText,
}

impl CommentFieldError {
    pub fn field(&self) -> &'static str {
        "text"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    pub fn new(raw: &str) -> Result<Self, CommentFieldError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(CommentFieldError::EmptyText);
        }
        Ok(CommentText(text.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentResult {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub review_id: Uuid,
    #[serde(skip_serializing)]
    pub author_id: UserId,
    /// Username of the author.
    pub author: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}
