pub mod code_generator;
pub mod confirmation_code_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use code_generator::ConfirmationCodeGenerator;
pub use confirmation_code_repository::{
    ConfirmationCodeRepository, ConfirmationCodeRepositoryError,
};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserListFilter, UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, UpdateUserData, UserRepository, UserRepositoryError};
