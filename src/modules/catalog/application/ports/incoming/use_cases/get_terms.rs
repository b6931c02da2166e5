use async_trait::async_trait;

use crate::catalog::application::domain::entities::{Term, VocabularyKind};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTermsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetTermsUseCase: Send + Sync {
    /// `search` matches the whole name.
    async fn execute(
        &self,
        kind: VocabularyKind,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Term>, GetTermsError>;
}
