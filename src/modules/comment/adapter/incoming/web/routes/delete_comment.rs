use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::RequiredActor,
    comment::application::ports::incoming::use_cases::DeleteCommentError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/")]
pub async fn delete_comment_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid, Uuid)>,
) -> impl Responder {
    let (title_id, review_id, comment_id) = path.into_inner();

    match data
        .comments
        .delete
        .execute(&actor, title_id, review_id, comment_id)
        .await
    {
        Ok(()) => {
            tracing::info!(comment_id = %comment_id, actor = %actor.username, "Comment deleted");
            ApiResponse::no_content()
        }
        Err(DeleteCommentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Comment not found")
        }
        Err(err @ DeleteCommentError::Forbidden) => {
            ApiResponse::forbidden("PERMISSION_DENIED", &err.to_string())
        }
        Err(DeleteCommentError::RepositoryError(msg)) => {
            tracing::error!(comment_id = %comment_id, error = %msg, "Failed to delete comment");
            ApiResponse::internal_error()
        }
    }
}
