use async_trait::async_trait;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::{
    incoming::use_cases::{GetTitlesError, GetTitlesUseCase},
    outgoing::{TitleFilter, TitleQuery},
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct GetTitlesService<Q>
where
    Q: TitleQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTitlesService<Q>
where
    Q: TitleQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[async_trait]
impl<Q> GetTitlesUseCase for GetTitlesService<Q>
where
    Q: TitleQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: TitleFilter,
        page: PageRequest,
    ) -> Result<PageResult<TitleResult>, GetTitlesError> {
        let filter = TitleFilter {
            genre: non_blank(filter.genre),
            category: non_blank(filter.category),
            year: filter.year,
            name: non_blank(filter.name),
        };

        self.query
            .list_titles(filter, page)
            .await
            .map_err(|e| GetTitlesError::QueryError(e.to_string()))
    }
}
