use async_trait::async_trait;

use crate::catalog::application::domain::entities::Term;
use crate::catalog::application::ports::{
    incoming::use_cases::{CreateTermCommand, CreateTermError, CreateTermUseCase},
    outgoing::{VocabularyRepository, VocabularyRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTermService<R>
where
    R: VocabularyRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTermService<R>
where
    R: VocabularyRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTermUseCase for CreateTermService<R>
where
    R: VocabularyRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTermCommand) -> Result<Term, CreateTermError> {
        let kind = command.kind();
        self.repository
            .create_term(kind, command.into_term())
            .await
            .map_err(|e| match e {
                VocabularyRepositoryError::SlugTaken => CreateTermError::SlugTaken(kind),
                other => CreateTermError::RepositoryError(other.to_string()),
            })
    }
}
