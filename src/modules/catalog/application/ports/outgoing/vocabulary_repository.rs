use async_trait::async_trait;

use crate::catalog::application::domain::entities::{Term, VocabularyKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyRepositoryError {
    #[error("Slug already exists")]
    SlugTaken,

    #[error("Term not found")]
    TermNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    async fn create_term(
        &self,
        kind: VocabularyKind,
        term: Term,
    ) -> Result<Term, VocabularyRepositoryError>;

    /// Deleting a category nulls the titles' reference; deleting a genre
    /// drops its title links.
    async fn delete_term(
        &self,
        kind: VocabularyKind,
        slug: &str,
    ) -> Result<(), VocabularyRepositoryError>;
}
