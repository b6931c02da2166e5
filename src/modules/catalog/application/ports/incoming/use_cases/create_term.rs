use async_trait::async_trait;

use crate::catalog::application::domain::entities::{
    check_name, check_slug, CatalogFieldError, Term, VocabularyKind, TERM_NAME_MAX_LEN,
};

#[derive(Debug, Clone)]
pub struct CreateTermCommand {
    kind: VocabularyKind,
    term: Term,
}

impl CreateTermCommand {
    pub fn new(kind: VocabularyKind, name: &str, slug: &str) -> Result<Self, CatalogFieldError> {
        Ok(Self {
            kind,
            term: Term {
                name: check_name(name, TERM_NAME_MAX_LEN)?,
                slug: check_slug(slug)?,
            },
        })
    }

    pub fn kind(&self) -> VocabularyKind {
        self.kind
    }

    pub fn into_term(self) -> Term {
        self.term
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTermError {
    #[error("A {0} with this slug already exists")]
    SlugTaken(VocabularyKind),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTermUseCase: Send + Sync {
    async fn execute(&self, command: CreateTermCommand) -> Result<Term, CreateTermError>;
}
