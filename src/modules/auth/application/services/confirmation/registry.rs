use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    ConfirmationCodeGenerator, ConfirmationCodeRepository,
};
use crate::auth::application::services::hash::hash_code;

use super::config::ConfirmationConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmationRegistryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Issues and checks the per-email confirmation codes.
#[derive(Clone)]
pub struct ConfirmationRegistry {
    repository: Arc<dyn ConfirmationCodeRepository + Send + Sync>,
    generator: Arc<dyn ConfirmationCodeGenerator + Send + Sync>,
    config: ConfirmationConfig,
}

impl ConfirmationRegistry {
    pub fn new(
        repository: Arc<dyn ConfirmationCodeRepository + Send + Sync>,
        generator: Arc<dyn ConfirmationCodeGenerator + Send + Sync>,
        config: ConfirmationConfig,
    ) -> Self {
        Self {
            repository,
            generator,
            config,
        }
    }

    /// Generates a fresh code for `email`, replacing any earlier one, and
    /// returns it in clear text for delivery.
    pub async fn issue_or_refresh(&self, email: &str) -> Result<String, ConfirmationRegistryError> {
        let code = self.generator.generate();

        self.repository
            .upsert(email, &hash_code(&code), Utc::now())
            .await
            .map_err(|e| ConfirmationRegistryError::RepositoryError(e.to_string()))?;

        Ok(code)
    }

    /// Unknown email, wrong code, stale code and (in single-use mode) an
    /// already redeemed code all yield `false`.
    pub async fn validate(&self, email: &str, code: &str) -> Result<bool, ConfirmationRegistryError> {
        if code.is_empty() {
            return Ok(false);
        }

        let code_hash = hash_code(code);
        let issued_after = Utc::now() - Duration::seconds(self.config.code_ttl_seconds);

        let result = if self.config.single_use {
            self.repository.consume(email, &code_hash, issued_after).await
        } else {
            self.repository.matches(email, &code_hash, issued_after).await
        };

        result.map_err(|e| ConfirmationRegistryError::RepositoryError(e.to_string()))
    }
}
