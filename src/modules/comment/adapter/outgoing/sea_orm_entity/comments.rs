use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Nulled when the review is deleted.
    pub review_id: Option<Uuid>,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub pub_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::review::adapter::outgoing::sea_orm_entity::reviews::Entity",
        from = "Column::ReviewId",
        to = "crate::review::adapter::outgoing::sea_orm_entity::reviews::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Reviews,

    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AuthorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `None` for comments detached from their review.
    pub fn into_result(
        self,
        author: String,
    ) -> Option<crate::comment::application::domain::entities::CommentResult> {
        use crate::auth::application::domain::entities::UserId;
        use crate::comment::application::domain::entities::CommentResult;

        Some(CommentResult {
            id: self.id,
            review_id: self.review_id?,
            author_id: UserId::from(self.author_id),
            author,
            text: self.text,
            pub_date: self.pub_date.with_timezone(&chrono::Utc),
        })
    }
}
