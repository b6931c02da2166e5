use std::sync::Arc;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateTermUseCase, CreateTitleUseCase, DeleteTermUseCase, DeleteTitleUseCase,
    GetTermsUseCase, GetTitleUseCase, GetTitlesUseCase, PatchTitleUseCase, ReplaceTitleUseCase,
};
use crate::catalog::application::ports::outgoing::{
    TitleQuery, TitleRepository, VocabularyQuery, VocabularyRepository,
};
use crate::catalog::application::services::{
    CreateTermService, CreateTitleService, DeleteTermService, DeleteTitleService, GetTermsService,
    GetTitleService, GetTitlesService, UpdateTitleService,
};

#[derive(Clone)]
pub struct CatalogUseCases {
    pub create_term: Arc<dyn CreateTermUseCase + Send + Sync>,
    pub get_terms: Arc<dyn GetTermsUseCase + Send + Sync>,
    pub delete_term: Arc<dyn DeleteTermUseCase + Send + Sync>,
    pub create_title: Arc<dyn CreateTitleUseCase + Send + Sync>,
    pub get_titles: Arc<dyn GetTitlesUseCase + Send + Sync>,
    pub get_title: Arc<dyn GetTitleUseCase + Send + Sync>,
    pub replace_title: Arc<dyn ReplaceTitleUseCase + Send + Sync>,
    pub patch_title: Arc<dyn PatchTitleUseCase + Send + Sync>,
    pub delete_title: Arc<dyn DeleteTitleUseCase + Send + Sync>,
}

impl CatalogUseCases {
    /// Wires every catalog service over the vocabulary and title ports.
    pub fn from_ports<VR, VQ, TR, TQ>(
        vocabulary_repository: VR,
        vocabulary_query: VQ,
        title_repository: TR,
        title_query: TQ,
    ) -> Self
    where
        VR: VocabularyRepository + Clone + Send + Sync + 'static,
        VQ: VocabularyQuery + Send + Sync + 'static,
        TR: TitleRepository + Clone + Send + Sync + 'static,
        TQ: TitleQuery + Clone + Send + Sync + 'static,
    {
        let update_title = Arc::new(UpdateTitleService::new(title_repository.clone()));

        Self {
            create_term: Arc::new(CreateTermService::new(vocabulary_repository.clone())),
            get_terms: Arc::new(GetTermsService::new(vocabulary_query)),
            delete_term: Arc::new(DeleteTermService::new(vocabulary_repository)),
            create_title: Arc::new(CreateTitleService::new(title_repository.clone())),
            get_titles: Arc::new(GetTitlesService::new(title_query.clone())),
            get_title: Arc::new(GetTitleService::new(title_query)),
            replace_title: update_title.clone(),
            patch_title: update_title,
            delete_title: Arc::new(DeleteTitleService::new(title_repository)),
        }
    }
}
