//! The one place a title's rating is written.
//!
//! Callers run both functions inside the transaction that changes the
//! title's reviews: lock first, mutate, then refresh before commit.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use crate::catalog::adapter::outgoing::sea_orm_entity::titles;
use crate::review::application::domain::rating::mean_rating;

use super::sea_orm_entity::reviews;

/// `SELECT ... FOR UPDATE` on the title row. Returns whether the title exists.
pub(crate) async fn lock_title<C>(conn: &C, title_id: Uuid) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let title = titles::Entity::find_by_id(title_id)
        .lock_exclusive()
        .one(conn)
        .await?;

    Ok(title.is_some())
}

/// Re-reads every review of the title and stores the rounded mean score.
pub(crate) async fn refresh_title_rating<C>(conn: &C, title_id: Uuid) -> Result<Option<i16>, DbErr>
where
    C: ConnectionTrait,
{
    let scores = reviews::Entity::find()
        .filter(reviews::Column::TitleId.eq(title_id))
        .all(conn)
        .await?
        .into_iter()
        .filter_map(|review| review.score);

    let rating = mean_rating(scores);

    titles::Entity::update_many()
        .col_expr(titles::Column::Rating, Expr::value(rating))
        .filter(titles::Column::Id.eq(title_id))
        .exec(conn)
        .await?;

    tracing::debug!(title_id = %title_id, rating = ?rating, "Title rating refreshed");

    Ok(rating)
}
