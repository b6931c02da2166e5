use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::application::domain::entities::TitleResult;
use crate::catalog::application::ports::outgoing::{TitleFilter, TitleQuery, TitleQueryError};
use crate::shared::api::{PageRequest, PageResult};
use crate::shared::persistence::contains_pattern;

use super::sea_orm_entity::{categories, genres, title_genres, titles};
use super::title_loader::assemble;

#[derive(Clone, Debug)]
pub struct TitleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TitleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TitleQueryError {
    TitleQueryError::DatabaseError(e.to_string())
}

fn filtered(filter: &TitleFilter) -> sea_orm::Select<titles::Entity> {
    let mut query = titles::Entity::find();

    if let Some(genre) = filter.genre.as_deref() {
        let linked = Query::select()
            .column((title_genres::Entity, title_genres::Column::TitleId))
            .from(title_genres::Entity)
            .inner_join(
                genres::Entity,
                Expr::col((genres::Entity, genres::Column::Id))
                    .equals((title_genres::Entity, title_genres::Column::GenreId)),
            )
            .and_where(Expr::col((genres::Entity, genres::Column::Slug)).ilike(contains_pattern(genre)))
            .to_owned();
        query = query.filter(titles::Column::Id.in_subquery(linked));
    }

    if let Some(category) = filter.category.as_deref() {
        let matching = Query::select()
            .column(categories::Column::Id)
            .from(categories::Entity)
            .and_where(Expr::col(categories::Column::Slug).ilike(contains_pattern(category)))
            .to_owned();
        query = query.filter(titles::Column::CategoryId.in_subquery(matching));
    }

    if let Some(year) = filter.year {
        query = query.filter(titles::Column::Year.eq(year));
    }

    if let Some(name) = filter.name.as_deref() {
        query = query.filter(Expr::col(titles::Column::Name).ilike(contains_pattern(name)));
    }

    query
        .order_by_asc(titles::Column::Name)
        .order_by_asc(titles::Column::Id)
}

#[async_trait]
impl TitleQuery for TitleQueryPostgres {
    async fn find_title(&self, title_id: Uuid) -> Result<Option<TitleResult>, TitleQueryError> {
        let Some(model) = titles::Entity::find_by_id(title_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(assemble(&*self.db, vec![model])
            .await
            .map_err(map_db_err)?
            .pop())
    }

    async fn list_titles(
        &self,
        filter: TitleFilter,
        page: PageRequest,
    ) -> Result<PageResult<TitleResult>, TitleQueryError> {
        let query = filtered(&filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = assemble(&*self.db, models).await.map_err(map_db_err)?;

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}
