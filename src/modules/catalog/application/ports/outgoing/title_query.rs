use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;
use crate::shared::api::{PageRequest, PageResult};

/// Substring filters are case-insensitive; `year` is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleFilter {
    pub genre: Option<String>,
    pub category: Option<String>,
    pub year: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TitleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TitleQuery: Send + Sync {
    async fn find_title(&self, title_id: Uuid) -> Result<Option<TitleResult>, TitleQueryError>;

    /// Ordered by name.
    async fn list_titles(
        &self,
        filter: TitleFilter,
        page: PageRequest,
    ) -> Result<PageResult<TitleResult>, TitleQueryError>;
}
