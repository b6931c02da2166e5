use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{normalize_sign_in_email, UserFieldError};
use crate::auth::application::services::confirmation::ConfirmationRegistry;
use crate::email::application::ports::outgoing::ConfirmationNotifier;

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct RequestCodeCommand {
    email: String,
}

impl RequestCodeCommand {
    pub fn new(email: String) -> Result<Self, UserFieldError> {
        let email = normalize_sign_in_email(&email)?;
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Outcome =========================

/// Delivery failure is not an error: the code stays stored and the caller
/// still answers with success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestCodeOutcome {
    Delivered { email: String },
    DeliveryFailed { email: String },
}

impl RequestCodeOutcome {
    pub fn message(&self) -> String {
        match self {
            RequestCodeOutcome::Delivered { email } => {
                format!("Check your email inbox ({email}) for confirmation.")
            }
            RequestCodeOutcome::DeliveryFailed { .. } => {
                "There was an error while sending the confirmation email.".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestCodeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait IRequestConfirmationCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RequestCodeCommand,
    ) -> Result<RequestCodeOutcome, RequestCodeError>;
}

#[derive(Clone)]
pub struct RequestConfirmationCodeUseCase {
    registry: ConfirmationRegistry,
    notifier: Arc<dyn ConfirmationNotifier + Send + Sync>,
}

impl RequestConfirmationCodeUseCase {
    pub fn new(
        registry: ConfirmationRegistry,
        notifier: Arc<dyn ConfirmationNotifier + Send + Sync>,
    ) -> Self {
        Self { registry, notifier }
    }
}

#[async_trait]
impl IRequestConfirmationCodeUseCase for RequestConfirmationCodeUseCase {
    async fn execute(
        &self,
        command: RequestCodeCommand,
    ) -> Result<RequestCodeOutcome, RequestCodeError> {
        let email = command.email().to_string();

        let code = self.registry.issue_or_refresh(&email).await.map_err(|e| {
            error!(email = %email, error = %e, "Failed to store confirmation code");
            RequestCodeError::RepositoryError(e.to_string())
        })?;

        match self.notifier.send_confirmation_code(&email, &code).await {
            Ok(()) => {
                info!(email = %email, "Confirmation code sent");
                Ok(RequestCodeOutcome::Delivered { email })
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Confirmation email delivery failed");
                Ok(RequestCodeOutcome::DeliveryFailed { email })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::services::confirmation::ConfirmationConfig;
    use crate::auth::application::services::hash::hash_code;
    use crate::email::application::ports::outgoing::ConfirmationNotificationError;
    use crate::tests::support::in_memory::{InMemoryConfirmationCodes, SequenceCodeGenerator};
    use mockall::mock;

    mock! {
        pub Notifier {}
        #[async_trait]
        impl ConfirmationNotifier for Notifier {
            async fn send_confirmation_code(
                &self,
                email: &str,
                code: &str,
            ) -> Result<(), ConfirmationNotificationError>;
        }
    }

    fn use_case(
        codes: &InMemoryConfirmationCodes,
        generated: &[&str],
        notifier: MockNotifier,
    ) -> RequestConfirmationCodeUseCase {
        let registry = ConfirmationRegistry::new(
            Arc::new(codes.clone()),
            Arc::new(SequenceCodeGenerator::new(generated)),
            ConfirmationConfig::default(),
        );
        RequestConfirmationCodeUseCase::new(registry, Arc::new(notifier))
    }

    #[test]
    fn command_normalizes_email() {
        let command = RequestCodeCommand::new("  U@X.com ".to_string()).unwrap();
        assert_eq!(command.email(), "u@x.com");
    }

    #[test]
    fn command_rejects_invalid_or_long_email() {
        assert_eq!(
            RequestCodeCommand::new("nope".to_string()).unwrap_err(),
            UserFieldError::InvalidEmail
        );
        let long = format!("{}@x.com", "a".repeat(250));
        assert_eq!(
            RequestCodeCommand::new(long).unwrap_err(),
            UserFieldError::EmailTooLong
        );
    }

    #[test]
    fn command_rejects_email_unusable_as_username() {
        let over = format!("{}@{}.{}.com", "a".repeat(60), "b".repeat(60), "c".repeat(60));
        assert_eq!(
            RequestCodeCommand::new(over).unwrap_err(),
            UserFieldError::SignInEmailTooLong
        );
        assert_eq!(
            RequestCodeCommand::new("a!b@x.com".to_string()).unwrap_err(),
            UserFieldError::SignInEmailCharacters
        );
    }

    #[tokio::test]
    async fn delivers_generated_code() {
        // Arrange
        let codes = InMemoryConfirmationCodes::default();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_confirmation_code()
            .withf(|email, code| email == "u@x.com" && code == "CODECODECODECODE")
            .times(1)
            .returning(|_, _| Ok(()));
        let use_case = use_case(&codes, &["CODECODECODECODE"], notifier);

        // Act
        let outcome = use_case
            .execute(RequestCodeCommand::new("u@x.com".into()).unwrap())
            .await
            .unwrap();

        // Assert
        assert_eq!(
            outcome,
            RequestCodeOutcome::Delivered {
                email: "u@x.com".into()
            }
        );
        assert_eq!(
            outcome.message(),
            "Check your email inbox (u@x.com) for confirmation."
        );
    }

    #[tokio::test]
    async fn delivery_failure_is_soft_and_code_is_kept() {
        // Arrange
        let codes = InMemoryConfirmationCodes::default();
        let mut notifier = MockNotifier::new();
        notifier.expect_send_confirmation_code().returning(|_, _| {
            Err(ConfirmationNotificationError::EmailSendingFailed(
                "smtp down".into(),
            ))
        });
        let use_case = use_case(&codes, &["KEEPKEEPKEEPKEEP"], notifier);

        // Act
        let outcome = use_case
            .execute(RequestCodeCommand::new("u@x.com".into()).unwrap())
            .await
            .unwrap();

        // Assert
        assert!(matches!(outcome, RequestCodeOutcome::DeliveryFailed { .. }));
        assert_eq!(
            outcome.message(),
            "There was an error while sending the confirmation email."
        );
        assert_eq!(codes.stored_hash("u@x.com"), Some(hash_code("KEEPKEEPKEEPKEEP")));
    }

    #[tokio::test]
    async fn requesting_twice_leaves_one_record_with_latest_code() {
        // Arrange
        let codes = InMemoryConfirmationCodes::default();
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_confirmation_code()
            .times(2)
            .returning(|_, _| Ok(()));
        let use_case = use_case(&codes, &["XXXXXXXXXXXXXXXX", "YYYYYYYYYYYYYYYY"], notifier);

        // Act
        for _ in 0..2 {
            use_case
                .execute(RequestCodeCommand::new("u@x.com".into()).unwrap())
                .await
                .unwrap();
        }

        // Assert
        assert_eq!(codes.record_count(), 1);
        assert_eq!(codes.stored_hash("u@x.com"), Some(hash_code("YYYYYYYYYYYYYYYY")));
    }
}
