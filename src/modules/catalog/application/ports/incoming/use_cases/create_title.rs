use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::catalog::application::domain::entities::{
    check_name, check_year, CatalogFieldError, TitleResult, TITLE_NAME_MAX_LEN,
};
use crate::catalog::application::ports::outgoing::TitleData;

//
// ──────────────────────────────────────────────────────────
// Title Command (create and full replace)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCommand {
    data: TitleData,
}

impl TitleCommand {
    pub fn new(
        name: &str,
        year: i32,
        description: Option<String>,
        category: Option<String>,
        genres: Vec<String>,
    ) -> Result<Self, CatalogFieldError> {
        Ok(Self {
            data: TitleData {
                name: check_name(name, TITLE_NAME_MAX_LEN)?,
                year: check_year(year, Utc::now().year())?,
                description: description.unwrap_or_default(),
                category: category.map(|s| s.trim().to_string()),
                genres: normalize_slugs(genres),
            },
        })
    }

    pub fn into_data(self) -> TitleData {
        self.data
    }
}

/// Trimmed, duplicates removed, first occurrence kept.
pub(crate) fn normalize_slugs(slugs: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(slugs.len());
    for slug in slugs {
        let slug = slug.trim().to_string();
        if !out.contains(&slug) {
            out.push(slug);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTitleError {
    #[error("Unknown category slug: {0}")]
    UnknownCategory(String),

    #[error("Unknown genre slug: {0}")]
    UnknownGenre(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTitleUseCase: Send + Sync {
    async fn execute(&self, command: TitleCommand) -> Result<TitleResult, CreateTitleError>;
}
