use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;
use crate::shared::patch::PatchField;

/// Full title representation; vocabulary terms are referenced by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleData {
    pub name: String,
    pub year: i32,
    pub description: String,
    pub category: Option<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchTitleData {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category: PatchField<String>,
    pub genres: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleRepositoryError {
    #[error("Title not found")]
    TitleNotFound,

    #[error("Unknown category slug: {0}")]
    UnknownCategory(String),

    #[error("Unknown genre slug: {0}")]
    UnknownGenre(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TitleRepository: Send + Sync {
    async fn create_title(&self, data: TitleData) -> Result<TitleResult, TitleRepositoryError>;

    async fn replace_title(
        &self,
        title_id: Uuid,
        data: TitleData,
    ) -> Result<TitleResult, TitleRepositoryError>;

    async fn patch_title(
        &self,
        title_id: Uuid,
        data: PatchTitleData,
    ) -> Result<TitleResult, TitleRepositoryError>;

    /// Reviews of the title stay, detached from it.
    async fn delete_title(&self, title_id: Uuid) -> Result<(), TitleRepositoryError>;
}
