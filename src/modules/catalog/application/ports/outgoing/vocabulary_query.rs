use async_trait::async_trait;

use crate::catalog::application::domain::entities::{Term, VocabularyKind};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VocabularyQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VocabularyQuery: Send + Sync {
    /// Ordered by name. `name` is an exact match filter.
    async fn list_terms(
        &self,
        kind: VocabularyKind,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Term>, VocabularyQueryError>;
}
