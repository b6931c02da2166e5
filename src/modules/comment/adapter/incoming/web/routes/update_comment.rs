use actix_web::{patch, put, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::RequiredActor,
        application::domain::policy::Actor,
    },
    comment::application::ports::incoming::use_cases::{UpdateCommentCommand, UpdateCommentError},
    shared::api::ApiResponse,
    AppState,
};

use super::create_comment::CommentRequest;

#[put("/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/")]
pub async fn replace_comment_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid, Uuid)>,
    payload: web::Json<CommentRequest>,
) -> impl Responder {
    update_comment(&actor, data, path.into_inner(), &payload.text).await
}

#[patch("/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/")]
pub async fn patch_comment_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid, Uuid)>,
    payload: web::Json<CommentRequest>,
) -> impl Responder {
    update_comment(&actor, data, path.into_inner(), &payload.text).await
}

async fn update_comment(
    actor: &Actor,
    data: web::Data<AppState>,
    (title_id, review_id, comment_id): (Uuid, Uuid, Uuid),
    text: &str,
) -> HttpResponse {
    let command = match UpdateCommentCommand::new(text) {
        Ok(cmd) => cmd,
        Err(err) => {
            return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
        }
    };

    match data
        .comments
        .update
        .execute(actor, title_id, review_id, comment_id, command)
        .await
    {
        Ok(comment) => {
            tracing::info!(comment_id = %comment_id, actor = %actor.username, "Comment updated");
            ApiResponse::success(comment)
        }
        Err(UpdateCommentError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Comment not found")
        }
        Err(err @ UpdateCommentError::Forbidden) => {
            tracing::warn!(comment_id = %comment_id, actor = %actor.username, "Comment update denied");
            ApiResponse::forbidden("PERMISSION_DENIED", &err.to_string())
        }
        Err(UpdateCommentError::RepositoryError(msg)) => {
            tracing::error!(comment_id = %comment_id, error = %msg, "Failed to update comment");
            ApiResponse::internal_error()
        }
    }
}
