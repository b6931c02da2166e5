use std::sync::Arc;

use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentUseCase, GetCommentsUseCase,
    UpdateCommentUseCase,
};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentRepository};
use crate::comment::application::services::{
    CreateCommentService, DeleteCommentService, GetCommentService, GetCommentsService,
    UpdateCommentService,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub create: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetCommentsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCommentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCommentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}

impl CommentUseCases {
    pub fn from_ports<R, Q>(repository: R, query: Q) -> Self
    where
        R: CommentRepository + Clone + Send + Sync + 'static,
        Q: CommentQuery + Clone + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(CreateCommentService::new(repository.clone())),
            get_list: Arc::new(GetCommentsService::new(query.clone())),
            get_single: Arc::new(GetCommentService::new(query.clone())),
            update: Arc::new(UpdateCommentService::new(query.clone(), repository.clone())),
            delete: Arc::new(DeleteCommentService::new(query, repository)),
        }
    }
}
