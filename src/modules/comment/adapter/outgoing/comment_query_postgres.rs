use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};
use crate::review::adapter::outgoing::sea_orm_entity::reviews;
use crate::shared::api::{PageRequest, PageResult};

use super::sea_orm_entity::comments::{self, Column, Entity};

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn review_in_title(&self, title_id: Uuid, review_id: Uuid) -> Result<bool, CommentQueryError> {
        let found = reviews::Entity::find_by_id(review_id)
            .filter(reviews::Column::TitleId.eq(title_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.is_some())
    }

    async fn usernames(&self, ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, CommentQueryError> {
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

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

fn attach_author(
    model: comments::Model,
    usernames: &HashMap<Uuid, String>,
) -> Option<CommentResult> {
    let author = usernames.get(&model.author_id).cloned().unwrap_or_default();
    model.into_result(author)
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentResult>, CommentQueryError> {
        if !self.review_in_title(title_id, review_id).await? {
            return Ok(None);
        }

        let Some(model) = Entity::find_by_id(comment_id)
            .filter(Column::ReviewId.eq(review_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let usernames = self.usernames(vec![model.author_id]).await?;
        Ok(attach_author(model, &usernames))
    }

    async fn list_comments(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentResult>, CommentQueryError> {
        if !self.review_in_title(title_id, review_id).await? {
            return Err(CommentQueryError::ReviewNotFound);
        }

        let query = Entity::find()
            .filter(Column::ReviewId.eq(review_id))
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
