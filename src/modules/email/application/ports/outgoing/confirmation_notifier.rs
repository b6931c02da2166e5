#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmationNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait ConfirmationNotifier: Send + Sync {
    async fn send_confirmation_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), ConfirmationNotificationError>;
}
