use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, UpdateReviewData,
};
use crate::shared::persistence::is_unique_violation;

use super::rating_refresh::{lock_title, refresh_title_rating};
use super::sea_orm_entity::reviews::{self, ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ReviewRepositoryError {
    ReviewRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_err(e: DbErr) -> ReviewRepositoryError {
    // Only unique index on reviews is (author_id, title_id).
    if is_unique_violation(&e) {
        ReviewRepositoryError::DuplicateReview
    } else {
        map_db_err(e)
    }
}

async fn ensure_title<C: ConnectionTrait>(conn: &C, title_id: Uuid) -> Result<(), ReviewRepositoryError> {
    if lock_title(conn, title_id).await.map_err(map_db_err)? {
        Ok(())
    } else {
        Err(ReviewRepositoryError::TitleNotFound)
    }
}

async fn find_in_title<C: ConnectionTrait>(
    conn: &C,
    title_id: Uuid,
    review_id: Uuid,
) -> Result<reviews::Model, ReviewRepositoryError> {
    Entity::find_by_id(review_id)
        .filter(Column::TitleId.eq(title_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or(ReviewRepositoryError::ReviewNotFound)
}

async fn with_author<C: ConnectionTrait>(
    conn: &C,
    model: reviews::Model,
) -> Result<ReviewResult, ReviewRepositoryError> {
    let author = users::Entity::find_by_id(model.author_id)
        .one(conn)
        .await
        .map_err(map_db_err)?
        .map(|u| u.username)
        .ok_or_else(|| ReviewRepositoryError::DatabaseError("review author missing".into()))?;

    model
        .into_result(author)
        .ok_or(ReviewRepositoryError::ReviewNotFound)
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<ReviewResult, ReviewRepositoryError> = async {
            ensure_title(&txn, data.title_id).await?;

            let existing = Entity::find()
                .filter(Column::TitleId.eq(data.title_id))
                .filter(Column::AuthorId.eq(data.author_id.value()))
                .one(&txn)
                .await
                .map_err(map_db_err)?;
            if existing.is_some() {
                return Err(ReviewRepositoryError::DuplicateReview);
            }

            let inserted = ActiveModel {
                id: Set(Uuid::new_v4()),
                title_id: Set(Some(data.title_id)),
                author_id: Set(data.author_id.value()),
                text: Set(data.text),
                score: Set(data.score),
                pub_date: Set(Utc::now().fixed_offset()),
            }
            .insert(&txn)
            .await
            .map_err(map_insert_err)?;

            refresh_title_rating(&txn, data.title_id)
                .await
                .map_err(map_db_err)?;

            with_author(&txn, inserted).await
        }
        .await;

        match result {
            Ok(review) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(review)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        data: UpdateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<ReviewResult, ReviewRepositoryError> = async {
            ensure_title(&txn, title_id).await?;
            let current = find_in_title(&txn, title_id, review_id).await?;

            let mut model: ActiveModel = current.clone().into();
            if let Some(text) = data.text {
                model.text = Set(text);
            }
            if let Some(score) = data.score {
                model.score = Set(score);
            }

            let saved = if model.is_changed() {
                model.update(&txn).await.map_err(map_db_err)?
            } else {
                current
            };

            refresh_title_rating(&txn, title_id)
                .await
                .map_err(map_db_err)?;

            with_author(&txn, saved).await
        }
        .await;

        match result {
            Ok(review) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(review)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<(), ReviewRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<(), ReviewRepositoryError> = async {
            ensure_title(&txn, title_id).await?;
            find_in_title(&txn, title_id, review_id).await?;

            Entity::delete_by_id(review_id)
                .exec(&txn)
                .await
                .map_err(map_db_err)?;

            refresh_title_rating(&txn, title_id)
                .await
                .map_err(map_db_err)?;

            Ok(())
        }
        .await;

        match result {
            Ok(()) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::catalog::adapter::outgoing::sea_orm_entity::titles;
    use crate::tests::support::fixtures::{review_model, title_model, user_model};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn exec_ok() -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }
    }

    fn create_data(title_id: Uuid, author: Uuid, score: Option<i16>) -> CreateReviewData {
        CreateReviewData {
            title_id,
            author_id: UserId::from(author),
            text: "Worth watching".to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn create_inserts_and_refreshes_rating() {
        // Arrange
        let title_id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let review = review_model(Uuid::new_v4(), title_id, author, Some(8));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // lock
            .append_query_results(vec![vec![title_model(title_id, "Movie A", None)]])
            // existing review by author
            .append_query_results(vec![Vec::<reviews::Model>::new()])
            // insert returning
            .append_query_results(vec![vec![review.clone()]])
            // refresh: reviews of the title
            .append_query_results(vec![vec![review.clone()]])
            // author
            .append_query_results(vec![vec![user_model(author, "ann")]])
            // rating update
            .append_exec_results(vec![exec_ok()])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        // Act
        let created = repo
            .create_review(create_data(title_id, author, Some(8)))
            .await
            .unwrap();

        // Assert
        assert_eq!(created.author, "ann");
        assert_eq!(created.score, Some(8));
        assert_eq!(created.title_id, title_id);
    }

    #[tokio::test]
    async fn create_for_missing_title_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<titles::Model>::new()])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_review(create_data(Uuid::new_v4(), Uuid::new_v4(), Some(8)))
            .await;

        assert_eq!(result.unwrap_err(), ReviewRepositoryError::TitleNotFound);
    }

    #[tokio::test]
    async fn create_duplicate_found_in_transaction() {
        let title_id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![title_model(title_id, "Movie A", Some(8))]])
            .append_query_results(vec![vec![review_model(
                Uuid::new_v4(),
                title_id,
                author,
                Some(8),
            )]])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_review(create_data(title_id, author, Some(1)))
            .await;

        assert_eq!(result.unwrap_err(), ReviewRepositoryError::DuplicateReview);
    }

    #[tokio::test]
    async fn create_duplicate_caught_by_unique_index() {
        let title_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![title_model(title_id, "Movie A", Some(8))]])
            .append_query_results(vec![Vec::<reviews::Model>::new()])
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_reviews_author_title_unique\""
                    .to_string(),
            )])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_review(create_data(title_id, Uuid::new_v4(), Some(1)))
            .await;

        assert_eq!(result.unwrap_err(), ReviewRepositoryError::DuplicateReview);
    }

    #[tokio::test]
    async fn update_of_review_in_other_title_is_not_found() {
        let title_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![title_model(title_id, "Movie A", None)]])
            .append_query_results(vec![Vec::<reviews::Model>::new()])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update_review(title_id, Uuid::new_v4(), UpdateReviewData::default())
            .await;

        assert_eq!(result.unwrap_err(), ReviewRepositoryError::ReviewNotFound);
    }

    #[tokio::test]
    async fn update_score_refreshes_rating() {
        // Arrange
        let title_id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let review_id = Uuid::new_v4();
        let current = review_model(review_id, title_id, author, Some(8));
        let mut changed = current.clone();
        changed.score = Some(2);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![title_model(title_id, "Movie A", Some(8))]])
            .append_query_results(vec![vec![current]])
            .append_query_results(vec![vec![changed.clone()]])
            .append_query_results(vec![vec![changed]])
            .append_query_results(vec![vec![user_model(author, "ann")]])
            .append_exec_results(vec![exec_ok()])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        // Act
        let updated = repo
            .update_review(
                title_id,
                review_id,
                UpdateReviewData {
                    text: None,
                    score: Some(Some(2)),
                },
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(updated.score, Some(2));
    }

    #[tokio::test]
    async fn delete_removes_and_refreshes() {
        let title_id = Uuid::new_v4();
        let review_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![title_model(title_id, "Movie A", Some(8))]])
            .append_query_results(vec![vec![review_model(
                review_id,
                title_id,
                Uuid::new_v4(),
                Some(8),
            )]])
            .append_query_results(vec![Vec::<reviews::Model>::new()])
            .append_exec_results(vec![exec_ok(), exec_ok()])
            .into_connection();
        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo.delete_review(title_id, review_id).await;

        assert!(result.is_ok(), "{result:?}");
    }
}
