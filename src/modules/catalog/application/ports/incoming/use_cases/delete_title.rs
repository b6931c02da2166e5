use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteTitleError {
    #[error("Title not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTitleUseCase: Send + Sync {
    async fn execute(&self, title_id: Uuid) -> Result<(), DeleteTitleError>;
}
