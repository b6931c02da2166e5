use async_trait::async_trait;

use crate::catalog::application::domain::entities::VocabularyKind;
use crate::catalog::application::ports::{
    incoming::use_cases::{DeleteTermError, DeleteTermUseCase},
    outgoing::{VocabularyRepository, VocabularyRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTermService<R>
where
    R: VocabularyRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTermService<R>
where
    R: VocabularyRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTermUseCase for DeleteTermService<R>
where
    R: VocabularyRepository + Send + Sync,
{
    async fn execute(&self, kind: VocabularyKind, slug: &str) -> Result<(), DeleteTermError> {
        self.repository
            .delete_term(kind, slug)
            .await
            .map_err(|e| match e {
                VocabularyRepositoryError::TermNotFound => DeleteTermError::NotFound(kind),
                other => DeleteTermError::RepositoryError(other.to_string()),
            })
    }
}
