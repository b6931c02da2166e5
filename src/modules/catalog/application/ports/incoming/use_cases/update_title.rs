use async_trait::async_trait;
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::catalog::application::domain::entities::{
    check_name, check_year, CatalogFieldError, TitleResult, TITLE_NAME_MAX_LEN,
};
use crate::catalog::application::ports::outgoing::PatchTitleData;
use crate::shared::patch::PatchField;

use super::create_title::{normalize_slugs, TitleCommand};

//
// ──────────────────────────────────────────────────────────
// Patch Title Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTitleCommand {
    data: PatchTitleData,
}

impl PatchTitleCommand {
    pub fn new(
        name: Option<&str>,
        year: Option<i32>,
        description: Option<String>,
        category: PatchField<String>,
        genres: Option<Vec<String>>,
    ) -> Result<Self, CatalogFieldError> {
        let current_year = Utc::now().year();
        Ok(Self {
            data: PatchTitleData {
                name: name
                    .map(|n| check_name(n, TITLE_NAME_MAX_LEN))
                    .transpose()?,
                year: year.map(|y| check_year(y, current_year)).transpose()?,
                description,
                category: category.map(|s| s.trim().to_string()),
                genres: genres.map(normalize_slugs),
            },
        })
    }

    pub fn into_data(self) -> PatchTitleData {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateTitleError {
    #[error("Title not found")]
    NotFound,

    #[error("Unknown category slug: {0}")]
    UnknownCategory(String),

    #[error("Unknown genre slug: {0}")]
    UnknownGenre(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// PUT: every field is replaced.
#[async_trait]
pub trait ReplaceTitleUseCase: Send + Sync {
    async fn execute(
        &self,
        title_id: Uuid,
        command: TitleCommand,
    ) -> Result<TitleResult, UpdateTitleError>;
}

/// PATCH: only the given fields change.
#[async_trait]
pub trait PatchTitleUseCase: Send + Sync {
    async fn execute(
        &self,
        title_id: Uuid,
        command: PatchTitleCommand,
    ) -> Result<TitleResult, UpdateTitleError>;
}
