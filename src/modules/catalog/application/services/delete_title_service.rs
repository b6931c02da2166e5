use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::{
    incoming::use_cases::{DeleteTitleError, DeleteTitleUseCase},
    outgoing::{TitleRepository, TitleRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTitleUseCase for DeleteTitleService<R>
where
    R: TitleRepository + Send + Sync,
{
    async fn execute(&self, title_id: Uuid) -> Result<(), DeleteTitleError> {
        self.repository
            .delete_title(title_id)
            .await
            .map_err(|e| match e {
                TitleRepositoryError::TitleNotFound => DeleteTitleError::NotFound,
                other => DeleteTitleError::RepositoryError(other.to_string()),
            })
    }
}
