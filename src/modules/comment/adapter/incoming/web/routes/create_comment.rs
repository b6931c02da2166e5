use actix_web::{post, web, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::domain::policy::Operation,
    },
    comment::application::ports::incoming::use_cases::{CreateCommentCommand, CreateCommentError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

#[post("/api/v1/titles/{title_id}/reviews/{review_id}/comments/")]
pub async fn create_comment_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    payload: web::Json<CommentRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::CreateComment, Some(&actor)) {
        return resp;
    }
    let (title_id, review_id) = path.into_inner();

    let command = match CreateCommentCommand::new(title_id, review_id, actor.id, &payload.text) {
        Ok(cmd) => cmd,
        Err(err) => {
            return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
        }
    };

    match data.comments.create.execute(command).await {
        Ok(comment) => {
            tracing::info!(
                review_id = %review_id,
                comment_id = %comment.id,
                author = %actor.username,
                "Comment created"
            );
            ApiResponse::created(comment)
        }
        Err(CreateCommentError::ReviewNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Review not found")
        }
        Err(CreateCommentError::RepositoryError(msg)) => {
            tracing::error!(review_id = %review_id, error = %msg, "Failed to create comment");
            ApiResponse::internal_error()
        }
    }
}
