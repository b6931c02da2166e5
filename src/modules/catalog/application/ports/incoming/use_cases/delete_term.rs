use async_trait::async_trait;

use crate::catalog::application::domain::entities::VocabularyKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteTermError {
    #[error("{0} not found")]
    NotFound(VocabularyKind),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTermUseCase: Send + Sync {
    async fn execute(&self, kind: VocabularyKind, slug: &str) -> Result<(), DeleteTermError>;
}
