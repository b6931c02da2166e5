use async_trait::async_trait;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::{
    incoming::use_cases::{CreateTitleError, CreateTitleUseCase, TitleCommand},
    outgoing::{TitleRepository, TitleRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTitleUseCase for CreateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    async fn execute(&self, command: TitleCommand) -> Result<TitleResult, CreateTitleError> {
        self.repository
            .create_title(command.into_data())
            .await
            .map_err(|e| match e {
                TitleRepositoryError::UnknownCategory(slug) => {
                    CreateTitleError::UnknownCategory(slug)
                }
                TitleRepositoryError::UnknownGenre(slug) => CreateTitleError::UnknownGenre(slug),
                other => CreateTitleError::RepositoryError(other.to_string()),
            })
    }
}
