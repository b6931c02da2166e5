use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::review::adapter::outgoing::rating_refresh::{lock_title, refresh_title_rating};
use crate::review::adapter::outgoing::sea_orm_entity::reviews;
use crate::shared::persistence::{is_unique_violation, is_unique_violation_on};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: UserModel) -> Result<User, UserRepositoryError> {
        User::try_from(model).map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

fn map_write_err(e: DbErr) -> UserRepositoryError {
    if is_unique_violation_on(&e, "username") {
        UserRepositoryError::UsernameTaken
    } else if is_unique_violation_on(&e, "email") {
        UserRepositoryError::EmailTaken
    } else if is_unique_violation(&e) {
        // Constraint name not reported; email is the column a race can hit.
        UserRepositoryError::EmailTaken
    } else {
        map_db_err(e)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            bio: Set(data.bio),
            role: Set(data.role.as_str().to_string()),
            is_staff: Set(data.is_staff),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_write_err)?;

        Self::map_model(inserted)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        if let Some(username) = data.username {
            active_user.username = Set(username);
        }
        if let Some(email) = data.email {
            active_user.email = Set(email);
        }
        if let Some(first_name) = data.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = data.last_name {
            active_user.last_name = Set(last_name);
        }
        if let Some(bio) = data.bio {
            active_user.bio = Set(bio);
        }
        if let Some(role) = data.role {
            active_user.role = Set(role.as_str().to_string());
        }

        let updated = active_user.update(&*self.db).await.map_err(map_write_err)?;

        Self::map_model(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result: Result<(), UserRepositoryError> = async {
            // Review inserts by this user block on the FK check until we commit.
            UserEntity::find_by_id(user_id.value())
                .lock_exclusive()
                .one(&txn)
                .await
                .map_err(map_db_err)?
                .ok_or(UserRepositoryError::UserNotFound)?;

            // Titles whose rating depends on this user's reviews, in lock order.
            let reviewed_titles: BTreeSet<Uuid> = reviews::Entity::find()
                .filter(reviews::Column::AuthorId.eq(user_id.value()))
                .all(&txn)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .filter_map(|review| review.title_id)
                .collect();

            for title_id in &reviewed_titles {
                lock_title(&txn, *title_id).await.map_err(map_db_err)?;
            }

            // Reviews and comments go with the user (ON DELETE CASCADE).
            UserEntity::delete_by_id(user_id.value())
                .exec(&txn)
                .await
                .map_err(map_db_err)?;

            for title_id in &reviewed_titles {
                refresh_title_rating(&txn, *title_id)
                    .await
                    .map_err(map_db_err)?;
            }

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
