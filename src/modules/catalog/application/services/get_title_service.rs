use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::{
    incoming::use_cases::{GetTitleError, GetTitleUseCase},
    outgoing::TitleQuery,
};

#[derive(Debug, Clone)]
pub struct GetTitleService<Q>
where
    Q: TitleQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTitleService<Q>
where
    Q: TitleQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTitleUseCase for GetTitleService<Q>
where
    Q: TitleQuery + Send + Sync,
{
    async fn execute(&self, title_id: Uuid) -> Result<TitleResult, GetTitleError> {
        self.query
            .find_title(title_id)
            .await
            .map_err(|e| GetTitleError::QueryError(e.to_string()))?
            .ok_or(GetTitleError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::catalog_mocks::MockTitleLookup;

    #[tokio::test]
    async fn missing_title_is_not_found() {
        let mut query = MockTitleLookup::new();
        query.expect_find_title().returning(|_| Ok(None));
        let service = GetTitleService::new(query);

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetTitleError::NotFound)));
    }
}
