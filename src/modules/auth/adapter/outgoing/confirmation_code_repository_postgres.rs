use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::confirmation_code_repository::{
    ConfirmationCodeRepository, ConfirmationCodeRepositoryError,
};

use super::sea_orm_entity::confirmation_codes::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ConfirmationCodeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ConfirmationCodeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ConfirmationCodeRepositoryError {
    ConfirmationCodeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ConfirmationCodeRepository for ConfirmationCodeRepositoryPostgres {
    async fn upsert(
        &self,
        email: &str,
        code_hash: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<(), ConfirmationCodeRepositoryError> {
        let record = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            code_hash: Set(code_hash.to_string()),
            issued_at: Set(issued_at.into()),
            confirmed: Set(false),
        };

        Entity::insert(record)
            .on_conflict(
                OnConflict::column(Column::Email)
                    .update_columns([Column::CodeHash, Column::IssuedAt, Column::Confirmed])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn consume(
        &self,
        email: &str,
        code_hash: &str,
        issued_after: DateTime<Utc>,
    ) -> Result<bool, ConfirmationCodeRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Confirmed, Expr::value(true))
            .filter(Column::Email.eq(email))
            .filter(Column::CodeHash.eq(code_hash))
            .filter(Column::Confirmed.eq(false))
            .filter(Column::IssuedAt.gt(issued_after))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected == 1)
    }

    async fn matches(
        &self,
        email: &str,
        code_hash: &str,
        issued_after: DateTime<Utc>,
    ) -> Result<bool, ConfirmationCodeRepositoryError> {
        let record = Entity::find()
            .filter(Column::Email.eq(email))
            .filter(Column::CodeHash.eq(code_hash))
            .filter(Column::IssuedAt.gt(issued_after))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(record.is_some())
    }
}
