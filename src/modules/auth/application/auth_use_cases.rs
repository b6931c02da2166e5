use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery, UserRepository};
use crate::auth::application::services::confirmation::ConfirmationRegistry;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    get_user::{GetUserUseCase, IGetUserUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    obtain_token::{IObtainTokenUseCase, ObtainTokenUseCase},
    request_confirmation_code::{IRequestConfirmationCodeUseCase, RequestConfirmationCodeUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};
use crate::email::application::ports::outgoing::ConfirmationNotifier;

/// Passwordless sign-in: request a code, trade it for a token.
#[derive(Clone)]
pub struct AuthUseCases {
    pub request_code: Arc<dyn IRequestConfirmationCodeUseCase + Send + Sync>,
    pub obtain_token: Arc<dyn IObtainTokenUseCase + Send + Sync>,
}

impl AuthUseCases {
    pub fn new(
        registry: ConfirmationRegistry,
        notifier: Arc<dyn ConfirmationNotifier + Send + Sync>,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            request_code: Arc::new(RequestConfirmationCodeUseCase::new(
                registry.clone(),
                notifier,
            )),
            obtain_token: Arc::new(ObtainTokenUseCase::new(
                registry,
                user_query,
                user_repository,
                token_provider,
            )),
        }
    }
}

#[derive(Clone)]
pub struct UserUseCases {
    pub list: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub get: Arc<dyn IGetUserUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteUserUseCase + Send + Sync>,
}

impl UserUseCases {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self {
            list: Arc::new(ListUsersUseCase::new(query.clone())),
            create: Arc::new(CreateUserUseCase::new(query.clone(), repository.clone())),
            get: Arc::new(GetUserUseCase::new(query.clone())),
            update: Arc::new(UpdateUserUseCase::new(query.clone(), repository.clone())),
            update_profile: Arc::new(UpdateProfileUseCase::new(query.clone(), repository.clone())),
            delete: Arc::new(DeleteUserUseCase::new(query, repository)),
        }
    }
}
