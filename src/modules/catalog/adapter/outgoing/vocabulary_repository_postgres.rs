use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Term, VocabularyKind};
use crate::catalog::application::ports::outgoing::{VocabularyRepository, VocabularyRepositoryError};
use crate::shared::persistence::is_unique_violation;

use super::sea_orm_entity::{categories, genres};

#[derive(Clone, Debug)]
pub struct VocabularyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VocabularyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> VocabularyRepositoryError {
    if is_unique_violation(&e) {
        VocabularyRepositoryError::SlugTaken
    } else {
        VocabularyRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl VocabularyRepository for VocabularyRepositoryPostgres {
    async fn create_term(
        &self,
        kind: VocabularyKind,
        term: Term,
    ) -> Result<Term, VocabularyRepositoryError> {
        let saved = match kind {
            VocabularyKind::Category => categories::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(term.name),
                slug: Set(term.slug),
            }
            .insert(&*self.db)
            .await
            .map(|m| Term { name: m.name, slug: m.slug }),
            VocabularyKind::Genre => genres::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(term.name),
                slug: Set(term.slug),
            }
            .insert(&*self.db)
            .await
            .map(|m| Term { name: m.name, slug: m.slug }),
        }
        .map_err(map_db_err)?;

        debug!(kind = %kind, slug = %saved.slug, "Vocabulary term created");
        Ok(saved)
    }

    async fn delete_term(
        &self,
        kind: VocabularyKind,
        slug: &str,
    ) -> Result<(), VocabularyRepositoryError> {
        let result = match kind {
            VocabularyKind::Category => {
                categories::Entity::delete_many()
                    .filter(categories::Column::Slug.eq(slug))
                    .exec(&*self.db)
                    .await
            }
            VocabularyKind::Genre => {
                genres::Entity::delete_many()
                    .filter(genres::Column::Slug.eq(slug))
                    .exec(&*self.db)
                    .await
            }
        }
        .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(VocabularyRepositoryError::TermNotFound);
        }
        Ok(())
    }
}
