use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::outgoing::{
    PatchTitleData, TitleData, TitleRepository, TitleRepositoryError,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::{categories, genres, title_genres, titles};
use super::title_loader::assemble;

#[derive(Clone, Debug)]
pub struct TitleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TitleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TitleRepositoryError {
    TitleRepositoryError::DatabaseError(e.to_string())
}

async fn resolve_category<C: ConnectionTrait>(
    conn: &C,
    slug: Option<String>,
) -> Result<Option<Uuid>, TitleRepositoryError> {
    let Some(slug) = slug else {
        return Ok(None);
    };

    categories::Entity::find()
        .filter(categories::Column::Slug.eq(slug.as_str()))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .map(|c| Some(c.id))
        .ok_or(TitleRepositoryError::UnknownCategory(slug))
}

/// Every slug must exist; the first unknown one is reported.
async fn resolve_genres<C: ConnectionTrait>(
    conn: &C,
    slugs: &[String],
) -> Result<Vec<Uuid>, TitleRepositoryError> {
    if slugs.is_empty() {
        return Ok(Vec::new());
    }

    let found = genres::Entity::find()
        .filter(genres::Column::Slug.is_in(slugs.iter().map(String::as_str)))
        .all(conn)
        .await
        .map_err(map_db_err)?;

    slugs
        .iter()
        .map(|slug| {
            found
                .iter()
                .find(|g| &g.slug == slug)
                .map(|g| g.id)
                .ok_or_else(|| TitleRepositoryError::UnknownGenre(slug.clone()))
        })
        .collect()
}

async fn write_links<C: ConnectionTrait>(
    conn: &C,
    title_id: Uuid,
    genre_ids: Vec<Uuid>,
) -> Result<(), TitleRepositoryError> {
    if genre_ids.is_empty() {
        return Ok(());
    }

    let links = genre_ids.into_iter().map(|genre_id| title_genres::ActiveModel {
        title_id: Set(title_id),
        genre_id: Set(genre_id),
    });

    title_genres::Entity::insert_many(links)
        .exec_without_returning(conn)
        .await
        .map_err(map_db_err)?;
    Ok(())
}

async fn clear_links<C: ConnectionTrait>(
    conn: &C,
    title_id: Uuid,
) -> Result<(), TitleRepositoryError> {
    title_genres::Entity::delete_many()
        .filter(title_genres::Column::TitleId.eq(title_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;
    Ok(())
}

async fn find_title<C: ConnectionTrait>(
    conn: &C,
    title_id: Uuid,
) -> Result<titles::Model, TitleRepositoryError> {
    titles::Entity::find_by_id(title_id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or(TitleRepositoryError::TitleNotFound)
}

async fn load_one<C: ConnectionTrait>(
    conn: &C,
    model: titles::Model,
) -> Result<TitleResult, TitleRepositoryError> {
    assemble(conn, vec![model])
        .await
        .map_err(map_db_err)?
        .pop()
        .ok_or(TitleRepositoryError::TitleNotFound)
}

#[async_trait]
impl TitleRepository for TitleRepositoryPostgres {
    async fn create_title(&self, data: TitleData) -> Result<TitleResult, TitleRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<TitleResult, TitleRepositoryError> = async {
            let category_id = resolve_category(&txn, data.category).await?;
            let genre_ids = resolve_genres(&txn, &data.genres).await?;

            let inserted = titles::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(data.name),
                year: Set(data.year),
                rating: Set(None),
                description: Set(data.description),
                category_id: Set(category_id),
            }
            .insert(&txn)
            .await
            .map_err(map_db_err)?;

            write_links(&txn, inserted.id, genre_ids).await?;
            load_one(&txn, inserted).await
        }
        .await;

        match result {
            Ok(title) => {
                txn.commit().await.map_err(map_db_err)?;
                debug!(title_id = %title.id, "Title created");
                Ok(title)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn replace_title(
        &self,
        title_id: Uuid,
        data: TitleData,
    ) -> Result<TitleResult, TitleRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<TitleResult, TitleRepositoryError> = async {
            let current = find_title(&txn, title_id).await?;
            let category_id = resolve_category(&txn, data.category).await?;
            let genre_ids = resolve_genres(&txn, &data.genres).await?;

            let mut model: titles::ActiveModel = current.into();
            model.name = Set(data.name);
            model.year = Set(data.year);
            model.description = Set(data.description);
            model.category_id = Set(category_id);
            let saved = model.update(&txn).await.map_err(map_db_err)?;

            clear_links(&txn, title_id).await?;
            write_links(&txn, title_id, genre_ids).await?;
            load_one(&txn, saved).await
        }
        .await;

        match result {
            Ok(title) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(title)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn patch_title(
        &self,
        title_id: Uuid,
        data: PatchTitleData,
    ) -> Result<TitleResult, TitleRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<TitleResult, TitleRepositoryError> = async {
            let current = find_title(&txn, title_id).await?;

            let category_change = match data.category {
                PatchField::Unset => None,
                PatchField::Null => Some(None),
                PatchField::Value(slug) => Some(resolve_category(&txn, Some(slug)).await?),
            };
            let genre_ids = match &data.genres {
                Some(slugs) => Some(resolve_genres(&txn, slugs).await?),
                None => None,
            };

            let mut model: titles::ActiveModel = current.clone().into();
            if let Some(name) = data.name {
                model.name = Set(name);
            }
            if let Some(year) = data.year {
                model.year = Set(year);
            }
            if let Some(description) = data.description {
                model.description = Set(description);
            }
            if let Some(category_id) = category_change {
                model.category_id = Set(category_id);
            }

            let saved = if model.is_changed() {
                model.update(&txn).await.map_err(map_db_err)?
            } else {
                current
            };

            if let Some(genre_ids) = genre_ids {
                clear_links(&txn, title_id).await?;
                write_links(&txn, title_id, genre_ids).await?;
            }
            load_one(&txn, saved).await
        }
        .await;

        match result {
            Ok(title) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(title)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_title(&self, title_id: Uuid) -> Result<(), TitleRepositoryError> {
        let result = titles::Entity::delete_by_id(title_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TitleRepositoryError::TitleNotFound);
        }
        debug!(title_id = %title_id, "Title deleted");
        Ok(())
    }
}
