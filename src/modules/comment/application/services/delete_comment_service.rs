use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::policy::{authorize, Actor, Operation};
use crate::comment::application::ports::{
    incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, CommentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
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
    ) -> Result<(), DeleteCommentError> {
        let current = self
            .query
            .find_comment(title_id, review_id, comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        if !authorize(Operation::DeleteComment, Some(actor), Some(current.author_id)).is_allowed()
        {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(title_id, review_id, comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound | CommentRepositoryError::ReviewNotFound => {
                    DeleteCommentError::NotFound
                }
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::comment::application::ports::outgoing::CreateCommentData;
    use crate::tests::support::in_memory::InMemoryCommentBoard;

    #[tokio::test]
    async fn admin_deletes_any_comment_once() {
        // Arrange
        let board = InMemoryCommentBoard::default();
        let title_id = Uuid::new_v4();
        let review_id = board.add_review(title_id);
        let comment = board
            .create_comment(CreateCommentData {
                title_id,
                review_id,
                author_id: UserId::from(Uuid::new_v4()),
                text: "spam".into(),
            })
            .await
            .unwrap();
        let admin = Actor {
            id: UserId::from(Uuid::new_v4()),
            username: "root".into(),
            role: Role::Admin,
            is_staff: false,
        };
        let service = DeleteCommentService::new(board.clone(), board.clone());

        // Act
        let first = service.execute(&admin, title_id, review_id, comment.id).await;
        let second = service.execute(&admin, title_id, review_id, comment.id).await;

        // Assert
        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(DeleteCommentError::NotFound));
        assert_eq!(board.comment_count(review_id), 0);
    }
}
