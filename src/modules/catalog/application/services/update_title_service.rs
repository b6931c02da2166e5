use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::{
    incoming::use_cases::{
        PatchTitleCommand, PatchTitleUseCase, ReplaceTitleUseCase, TitleCommand, UpdateTitleError,
    },
    outgoing::{TitleRepository, TitleRepositoryError},
};

/// Serves both full replacement and partial update.
#[derive(Debug, Clone)]
pub struct UpdateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: TitleRepositoryError) -> UpdateTitleError {
    match e {
        TitleRepositoryError::TitleNotFound => UpdateTitleError::NotFound,
        TitleRepositoryError::UnknownCategory(slug) => UpdateTitleError::UnknownCategory(slug),
        TitleRepositoryError::UnknownGenre(slug) => UpdateTitleError::UnknownGenre(slug),
        TitleRepositoryError::DatabaseError(msg) => UpdateTitleError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> ReplaceTitleUseCase for UpdateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    async fn execute(
        &self,
        title_id: Uuid,
        command: TitleCommand,
    ) -> Result<TitleResult, UpdateTitleError> {
        self.repository
            .replace_title(title_id, command.into_data())
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> PatchTitleUseCase for UpdateTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    async fn execute(
        &self,
        title_id: Uuid,
        command: PatchTitleCommand,
    ) -> Result<TitleResult, UpdateTitleError> {
        self.repository
            .patch_title(title_id, command.into_data())
            .await
            .map_err(map_repository_error)
    }
}
