use async_trait::async_trait;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::outgoing::TitleFilter;
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTitlesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetTitlesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TitleFilter,
        page: PageRequest,
    ) -> Result<PageResult<TitleResult>, GetTitlesError>;
}
