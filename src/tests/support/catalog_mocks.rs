use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Term, TitleResult, VocabularyKind};
use crate::catalog::application::ports::outgoing::{
    PatchTitleData, TitleData, TitleFilter, TitleQuery, TitleQueryError, TitleRepository,
    TitleRepositoryError, VocabularyQuery, VocabularyQueryError, VocabularyRepository,
    VocabularyRepositoryError,
};
use crate::shared::api::{PageRequest, PageResult};

mock! {
    pub VocabularyRepo {}
    #[async_trait]
    impl VocabularyRepository for VocabularyRepo {
        async fn create_term(
            &self,
            kind: VocabularyKind,
            term: Term,
        ) -> Result<Term, VocabularyRepositoryError>;

        async fn delete_term(
            &self,
            kind: VocabularyKind,
            slug: &str,
        ) -> Result<(), VocabularyRepositoryError>;
    }
}

mock! {
    pub VocabularyLookup {}
    #[async_trait]
    impl VocabularyQuery for VocabularyLookup {
        async fn list_terms(
            &self,
            kind: VocabularyKind,
            name: Option<String>,
            page: PageRequest,
        ) -> Result<PageResult<Term>, VocabularyQueryError>;
    }
}

mock! {
    pub TitleRepo {}
    #[async_trait]
    impl TitleRepository for TitleRepo {
        async fn create_title(&self, data: TitleData) -> Result<TitleResult, TitleRepositoryError>;

        async fn replace_title(
            &self,
            title_id: Uuid,
            data: TitleData,
        ) -> Result<TitleResult, TitleRepositoryError>;

        async fn patch_title(
            &self,
            title_id: Uuid,
            data: PatchTitleData,
        ) -> Result<TitleResult, TitleRepositoryError>;

        async fn delete_title(&self, title_id: Uuid) -> Result<(), TitleRepositoryError>;
    }
}

mock! {
    pub TitleLookup {}
    #[async_trait]
    impl TitleQuery for TitleLookup {
        async fn find_title(&self, title_id: Uuid) -> Result<Option<TitleResult>, TitleQueryError>;

        async fn list_titles(
            &self,
            filter: TitleFilter,
            page: PageRequest,
        ) -> Result<PageResult<TitleResult>, TitleQueryError>;
    }
}
