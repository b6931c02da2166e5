use async_trait::async_trait;

use crate::catalog::application::domain::entities::{Term, VocabularyKind};
use crate::catalog::application::ports::{
    incoming::use_cases::{GetTermsError, GetTermsUseCase},
    outgoing::VocabularyQuery,
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct GetTermsService<Q>
where
    Q: VocabularyQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTermsService<Q>
where
    Q: VocabularyQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTermsUseCase for GetTermsService<Q>
where
    Q: VocabularyQuery + Send + Sync,
{
    async fn execute(
        &self,
        kind: VocabularyKind,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Term>, GetTermsError> {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.query
            .list_terms(kind, search, page)
            .await
            .map_err(|e| GetTermsError::QueryError(e.to_string()))
    }
}
