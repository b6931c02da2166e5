use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CreateCommentData,
};
use crate::review::adapter::outgoing::sea_orm_entity::reviews;

use super::sea_orm_entity::comments::{self, ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

async fn ensure_review<C: ConnectionTrait>(
    conn: &C,
    title_id: Uuid,
    review_id: Uuid,
) -> Result<(), CommentRepositoryError> {
    reviews::Entity::find_by_id(review_id)
        .filter(reviews::Column::TitleId.eq(title_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .map(|_| ())
        .ok_or(CommentRepositoryError::ReviewNotFound)
}

async fn with_author<C: ConnectionTrait>(
    conn: &C,
    model: comments::Model,
) -> Result<CommentResult, CommentRepositoryError> {
    let author = users::Entity::find_by_id(model.author_id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .map(|u| u.username)
        .ok_or_else(|| CommentRepositoryError::DatabaseError("comment author missing".into()))?;

    model
        .into_result(author)
        .ok_or(CommentRepositoryError::CommentNotFound)
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError> {
        ensure_review(&*self.db, data.title_id, data.review_id).await?;

        let inserted = ActiveModel {
            id: Set(Uuid::new_v4()),
            review_id: Set(Some(data.review_id)),
            author_id: Set(data.author_id.value()),
            text: Set(data.text),
            pub_date: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        with_author(&*self.db, inserted).await
    }

    async fn update_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        text: String,
    ) -> Result<CommentResult, CommentRepositoryError> {
        ensure_review(&*self.db, title_id, review_id).await?;

        let current = Entity::find_by_id(comment_id)
            .filter(Column::ReviewId.eq(review_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CommentRepositoryError::CommentNotFound)?;

        let mut model: ActiveModel = current.into();
        model.text = Set(text);
        let saved = model.update(&*self.db).await.map_err(map_db_err)?;

        with_author(&*self.db, saved).await
    }

    async fn delete_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), CommentRepositoryError> {
        ensure_review(&*self.db, title_id, review_id).await?;

        let result = Entity::delete_many()
            .filter(Column::Id.eq(comment_id))
            .filter(Column::ReviewId.eq(review_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::CommentNotFound);
        }
        Ok(())
    }
}
