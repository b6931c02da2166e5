use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::{AuthUseCases, UserUseCases};
use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery, UserRepository};
use crate::auth::application::services::confirmation::{ConfirmationConfig, ConfirmationRegistry};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
use crate::email::application::services::ConfirmationEmailService;
use crate::review::application::review_use_cases::ReviewUseCases;
use crate::tests::support::auth_helper::create_test_jwt_service;
use crate::tests::support::in_memory::{
    InMemoryCatalog, InMemoryCommentBoard, InMemoryConfirmationCodes, InMemoryReviewLedger,
    InMemoryUsers, SequenceCodeGenerator,
};
use crate::AppState;

/// Builds an [`AppState`] whose use cases run over in-memory stores. Pass a
/// store in with `with_*` and keep your own clone to inspect it afterwards.
#[derive(Default)]
pub struct TestAppStateBuilder {
    users: InMemoryUsers,
    codes: InMemoryConfirmationCodes,
    issued_codes: Vec<String>,
    outbox: MockEmailSender,
    catalog: InMemoryCatalog,
    reviews: InMemoryReviewLedger,
    comments: InMemoryCommentBoard,
}

impl TestAppStateBuilder {
    pub fn with_users(mut self, users: InMemoryUsers) -> Self {
        self.users = users;
        self
    }

    /// `issued_codes` are handed out in order by the code generator.
    pub fn with_confirmation(
        mut self,
        codes: &InMemoryConfirmationCodes,
        issued_codes: &[&str],
        outbox: MockEmailSender,
    ) -> Self {
        self.codes = codes.clone();
        self.issued_codes = issued_codes.iter().map(|c| c.to_string()).collect();
        self.outbox = outbox;
        self
    }

    pub fn with_catalog(mut self, catalog: &InMemoryCatalog) -> Self {
        self.catalog = catalog.clone();
        self
    }

    pub fn with_reviews(mut self, reviews: &InMemoryReviewLedger) -> Self {
        self.reviews = reviews.clone();
        self
    }

    pub fn with_comments(mut self, comments: &InMemoryCommentBoard) -> Self {
        self.comments = comments.clone();
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let user_query: Arc<dyn UserQuery + Send + Sync> = Arc::new(self.users.clone());
        let user_repository: Arc<dyn UserRepository + Send + Sync> = Arc::new(self.users);
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_jwt_service());

        let issued: Vec<&str> = self.issued_codes.iter().map(String::as_str).collect();
        let registry = ConfirmationRegistry::new(
            Arc::new(self.codes),
            Arc::new(SequenceCodeGenerator::new(&issued)),
            ConfirmationConfig::default(),
        );
        let notifier = Arc::new(ConfirmationEmailService::new(Arc::new(self.outbox), false));

        web::Data::new(AppState {
            auth: AuthUseCases::new(
                registry,
                notifier,
                user_query.clone(),
                user_repository.clone(),
                token_provider,
            ),
            users: UserUseCases::new(user_query.clone(), user_repository),
            catalog: CatalogUseCases::from_ports(
                self.catalog.clone(),
                self.catalog.clone(),
                self.catalog.clone(),
                self.catalog,
            ),
            reviews: ReviewUseCases::from_ports(self.reviews.clone(), self.reviews),
            comments: CommentUseCases::from_ports(self.comments.clone(), self.comments),
            user_query,
        })
    }
}
