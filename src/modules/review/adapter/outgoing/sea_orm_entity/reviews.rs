use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Nulled when the title is deleted.
    pub title_id: Option<Uuid>,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub score: Option<i16>,
    pub pub_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::catalog::adapter::outgoing::sea_orm_entity::titles::Entity",
        from = "Column::TitleId",
        to = "crate::catalog::adapter::outgoing::sea_orm_entity::titles::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Titles,

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
    /// `None` for reviews detached from their title.
    pub fn into_result(
        self,
        author: String,
    ) -> Option<crate::review::application::domain::entities::ReviewResult> {
        use crate::auth::application::domain::entities::UserId;
        use crate::review::application::domain::entities::ReviewResult;

        Some(ReviewResult {
            id: self.id,
            title_id: self.title_id?,
            author_id: UserId::from(self.author_id),
            author,
            text: self.text,
            score: self.score,
            pub_date: self.pub_date.with_timezone(&chrono::Utc),
        })
    }
}
