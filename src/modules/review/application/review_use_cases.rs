use std::sync::Arc;

use crate::review::application::ports::incoming::use_cases::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, GetReviewsUseCase,
    UpdateReviewUseCase,
};
use crate::review::application::ports::outgoing::{ReviewQuery, ReviewRepository};
use crate::review::application::services::{
    CreateReviewService, DeleteReviewService, GetReviewService, GetReviewsService,
    UpdateReviewService,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub create: Arc<dyn CreateReviewUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetReviewsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetReviewUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
}

impl ReviewUseCases {
    pub fn from_ports<R, Q>(repository: R, query: Q) -> Self
    where
        R: ReviewRepository + Clone + Send + Sync + 'static,
        Q: ReviewQuery + Clone + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(CreateReviewService::new(repository.clone())),
            get_list: Arc::new(GetReviewsService::new(query.clone())),
            get_single: Arc::new(GetReviewService::new(query.clone())),
            update: Arc::new(UpdateReviewService::new(query.clone(), repository.clone())),
            delete: Arc::new(DeleteReviewService::new(query, repository)),
        }
    }
}
