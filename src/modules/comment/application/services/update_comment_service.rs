use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{authorize, Actor, Operation};
use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::{
    incoming::use_cases::{UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, CommentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateCommentUseCase for UpdateCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        let current = self
            .query
            .find_comment(title_id, review_id, comment_id)
            .await
            .map_err(|e| UpdateCommentError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCommentError::NotFound)?;

        if !authorize(Operation::UpdateComment, Some(actor), Some(current.author_id)).is_allowed()
        {
            return Err(UpdateCommentError::Forbidden);
        }

        self.repository
            .update_comment(title_id, review_id, comment_id, command.into_text())
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound | CommentRepositoryError::ReviewNotFound => {
                    UpdateCommentError::NotFound
                }
                other => UpdateCommentError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::comment::application::ports::outgoing::CreateCommentData;
    use crate::tests::support::in_memory::InMemoryCommentBoard;

    fn actor(id: UserId, role: Role) -> Actor {
        Actor {
            id,
            username: format!("user-{id}"),
            role,
            is_staff: false,
        }
    }

    async fn seeded() -> (InMemoryCommentBoard, Uuid, Uuid, CommentResult) {
        let board = InMemoryCommentBoard::default();
        let title_id = Uuid::new_v4();
        let review_id = board.add_review(title_id);
        let comment = board
            .create_comment(CreateCommentData {
                title_id,
                review_id,
                author_id: UserId::from(Uuid::new_v4()),
                text: "first take".into(),
            })
            .await
            .unwrap();
        (board, title_id, review_id, comment)
    }

    #[tokio::test]
    async fn author_edits_own_comment() {
        // Arrange
        let (board, title_id, review_id, comment) = seeded().await;
        let service = UpdateCommentService::new(board.clone(), board);

        // Act
        let updated = service
            .execute(
                &actor(comment.author_id, Role::User),
                title_id,
                review_id,
                comment.id,
                UpdateCommentCommand::new("second take").unwrap(),
            )
            .await
            .unwrap();

        // Assert
        assert_eq!(updated.text, "second take");
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let (board, title_id, review_id, comment) = seeded().await;
        let service = UpdateCommentService::new(board.clone(), board);

        let result = service
            .execute(
                &actor(UserId::from(Uuid::new_v4()), Role::User),
                title_id,
                review_id,
                comment.id,
                UpdateCommentCommand::new("hijack").unwrap(),
            )
            .await;

        assert_eq!(result.unwrap_err(), UpdateCommentError::Forbidden);
    }

    #[tokio::test]
    async fn moderator_may_edit() {
        let (board, title_id, review_id, comment) = seeded().await;
        let service = UpdateCommentService::new(board.clone(), board);

        let result = service
            .execute(
                &actor(UserId::from(Uuid::new_v4()), Role::Moderator),
                title_id,
                review_id,
                comment.id,
                UpdateCommentCommand::new("moderated").unwrap(),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn wrong_review_path_is_not_found() {
        let (board, title_id, _review_id, comment) = seeded().await;
        let service = UpdateCommentService::new(board.clone(), board);

        let result = service
            .execute(
                &actor(comment.author_id, Role::User),
                title_id,
                Uuid::new_v4(),
                comment.id,
                UpdateCommentCommand::new("lost").unwrap(),
            )
            .await;

        assert_eq!(result.unwrap_err(), UpdateCommentError::NotFound);
    }
}
