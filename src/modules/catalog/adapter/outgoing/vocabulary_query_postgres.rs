use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::catalog::application::domain::entities::{Term, VocabularyKind};
use crate::catalog::application::ports::outgoing::{VocabularyQuery, VocabularyQueryError};
use crate::shared::api::{PageRequest, PageResult};

use super::sea_orm_entity::{categories, genres};

#[derive(Clone, Debug)]
pub struct VocabularyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VocabularyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn list_categories(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<(u64, Vec<Term>), DbErr> {
        let mut query = categories::Entity::find();
        if let Some(name) = name {
            query = query.filter(categories::Column::Name.eq(name));
        }
        let query = query
            .order_by_asc(categories::Column::Name)
            .order_by_asc(categories::Column::Slug);

        let total = query.clone().count(&*self.db).await?;
        let items = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|m| Term { name: m.name, slug: m.slug })
            .collect();

        Ok((total, items))
    }

    async fn list_genres(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<(u64, Vec<Term>), DbErr> {
        let mut query = genres::Entity::find();
        if let Some(name) = name {
            query = query.filter(genres::Column::Name.eq(name));
        }
        let query = query
            .order_by_asc(genres::Column::Name)
            .order_by_asc(genres::Column::Slug);

        let total = query.clone().count(&*self.db).await?;
        let items = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|m| Term { name: m.name, slug: m.slug })
            .collect();

        Ok((total, items))
    }
}

#[async_trait]
impl VocabularyQuery for VocabularyQueryPostgres {
    async fn list_terms(
        &self,
        kind: VocabularyKind,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Term>, VocabularyQueryError> {
        let (total, items) = match kind {
            VocabularyKind::Category => self.list_categories(name, page).await,
            VocabularyKind::Genre => self.list_genres(name, page).await,
        }
        .map_err(|e| VocabularyQueryError::DatabaseError(e.to_string()))?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}
