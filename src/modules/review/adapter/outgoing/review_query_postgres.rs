use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::catalog::adapter::outgoing::sea_orm_entity::titles;
use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::ports::outgoing::{ReviewQuery, ReviewQueryError};
use crate::shared::api::{PageRequest, PageResult};

use super::sea_orm_entity::reviews::{self, Column, Entity};

#[derive(Clone, Debug)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn usernames(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, ReviewQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = users::Entity::find()
            .filter(users::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }
}

fn map_db_err(e: DbErr) -> ReviewQueryError {
    ReviewQueryError::DatabaseError(e.to_string())
}

fn attach_author(
    model: reviews::Model,
    usernames: &HashMap<Uuid, String>,
) -> Option<ReviewResult> {
    let author = usernames.get(&model.author_id).cloned().unwrap_or_default();
    model.into_result(author)
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn find_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewQueryError> {
        let Some(model) = Entity::find_by_id(review_id)
            .filter(Column::TitleId.eq(title_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let usernames = self.usernames(vec![model.author_id]).await?;
        Ok(attach_author(model, &usernames))
    }

    async fn list_reviews(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ReviewResult>, ReviewQueryError> {
        titles::Entity::find_by_id(title_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ReviewQueryError::TitleNotFound)?;

        let query = Entity::find()
            .filter(Column::TitleId.eq(title_id))
            .order_by_asc(Column::PubDate)
            .order_by_asc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let usernames = self
            .usernames(models.iter().map(|m| m.author_id).collect())
            .await?;

        let items = models
            .into_iter()
            .filter_map(|m| attach_author(m, &usernames))
            .collect();

        Ok(PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}
