use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{normalize_sign_in_email, User};
use crate::auth::application::ports::outgoing::{
    CreateUserData, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::confirmation::ConfirmationRegistry;

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct ObtainTokenCommand {
    email: String,
    confirmation_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObtainTokenCommandError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Confirmation code is required")]
    MissingCode,
}

impl ObtainTokenCommand {
    /// Malformed emails are not rejected here; they simply never match a code.
    pub fn new(email: String, confirmation_code: String) -> Result<Self, ObtainTokenCommandError> {
        if email.trim().is_empty() {
            return Err(ObtainTokenCommandError::MissingEmail);
        }
        let confirmation_code = confirmation_code.trim().to_string();
        if confirmation_code.is_empty() {
            return Err(ObtainTokenCommandError::MissingCode);
        }

        let email = normalize_sign_in_email(&email).unwrap_or_else(|_| email.trim().to_lowercase());

        Ok(Self {
            email,
            confirmation_code,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn confirmation_code(&self) -> &str {
        &self.confirmation_code
    }
}

// ========================= Result / Error =========================

#[derive(Debug, Clone, Serialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct ObtainTokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObtainTokenError {
    #[error("Invalid email or confirmation code.")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait IObtainTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ObtainTokenCommand,
    ) -> Result<ObtainTokenResponse, ObtainTokenError>;
}

#[derive(Clone)]
pub struct ObtainTokenUseCase {
    registry: ConfirmationRegistry,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl ObtainTokenUseCase {
    pub fn new(
        registry: ConfirmationRegistry,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            user_query,
            user_repository,
            token_provider,
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ObtainTokenError> {
        self.user_query
            .find_by_email(email)
            .await
            .map_err(|e| ObtainTokenError::RepositoryError(e.to_string()))
    }

    /// Returns the existing user or provisions one with username = email.
    async fn find_or_provision(&self, email: &str) -> Result<User, ObtainTokenError> {
        if let Some(user) = self.find_by_email(email).await? {
            return Ok(user);
        }

        match self
            .user_repository
            .create_user(CreateUserData::from_email(email))
            .await
        {
            Ok(user) => {
                info!(email = %email, user_id = %user.id, "Provisioned user from confirmation code");
                Ok(user)
            }
            // A concurrent redemption created the user first.
            Err(UserRepositoryError::EmailTaken) | Err(UserRepositoryError::UsernameTaken) => self
                .find_by_email(email)
                .await?
                .ok_or_else(|| {
                    ObtainTokenError::RepositoryError(
                        "user vanished after unique violation".to_string(),
                    )
                }),
            Err(e) => Err(ObtainTokenError::RepositoryError(e.to_string())),
        }
    }
}

#[async_trait]
impl IObtainTokenUseCase for ObtainTokenUseCase {
    async fn execute(
        &self,
        command: ObtainTokenCommand,
    ) -> Result<ObtainTokenResponse, ObtainTokenError> {
        let email = command.email();

        let valid = self
            .registry
            .validate(email, command.confirmation_code())
            .await
            .map_err(|e| {
                error!(email = %email, error = %e, "Failed to validate confirmation code");
                ObtainTokenError::RepositoryError(e.to_string())
            })?;

        if !valid {
            warn!(email = %email, "Rejected confirmation code");
            return Err(ObtainTokenError::InvalidCredentials);
        }

        let user = self.find_or_provision(email).await?;

        let token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| ObtainTokenError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "Access token issued");
        Ok(ObtainTokenResponse { token })
    }
}
