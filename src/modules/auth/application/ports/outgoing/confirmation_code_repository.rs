use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmationCodeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage for one live confirmation code per email. Codes arrive here hashed.
#[async_trait]
pub trait ConfirmationCodeRepository: Send + Sync {
    /// Insert or overwrite the record for `email`, resetting `confirmed`.
    async fn upsert(
        &self,
        email: &str,
        code_hash: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<(), ConfirmationCodeRepositoryError>;

    /// Atomically mark the record confirmed if the hash matches, it is still
    /// unconfirmed and it was issued after `issued_after`. Returns whether a
    /// record was consumed.
    async fn consume(
        &self,
        email: &str,
        code_hash: &str,
        issued_after: DateTime<Utc>,
    ) -> Result<bool, ConfirmationCodeRepositoryError>;

    /// Non-consuming variant of [`consume`](Self::consume); ignores `confirmed`.
    async fn matches(
        &self,
        email: &str,
        code_hash: &str,
        issued_after: DateTime<Utc>,
    ) -> Result<bool, ConfirmationCodeRepositoryError>;
}
