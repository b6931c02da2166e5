use actix_web::{patch, put, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::RequiredActor,
        application::domain::policy::Actor,
    },
    review::application::ports::incoming::use_cases::{UpdateReviewCommand, UpdateReviewError},
    shared::{api::ApiResponse, patch::PatchField},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ReplaceReviewRequest {
    pub text: String,
    pub score: Option<i16>,
}

#[derive(Debug, Deserialize)]
pub struct PatchReviewRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub score: PatchField<i16>,
}

#[put("/api/v1/titles/{title_id}/reviews/{review_id}/")]
pub async fn replace_review_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    payload: web::Json<ReplaceReviewRequest>,
) -> impl Responder {
    let (title_id, review_id) = path.into_inner();

    match UpdateReviewCommand::replace(&payload.text, payload.score) {
        Ok(command) => update_review(&actor, data, title_id, review_id, command).await,
        Err(err) => ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string()),
    }
}

#[patch("/api/v1/titles/{title_id}/reviews/{review_id}/")]
pub async fn patch_review_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    payload: web::Json<PatchReviewRequest>,
) -> impl Responder {
    let (title_id, review_id) = path.into_inner();
    let payload = payload.into_inner();

    match UpdateReviewCommand::patch(payload.text.as_deref(), payload.score) {
        Ok(command) => update_review(&actor, data, title_id, review_id, command).await,
        Err(err) => ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string()),
    }
}

async fn update_review(
    actor: &Actor,
    data: web::Data<AppState>,
    title_id: Uuid,
    review_id: Uuid,
    command: UpdateReviewCommand,
) -> HttpResponse {
    match data
        .reviews
        .update
        .execute(actor, title_id, review_id, command)
        .await
    {
        Ok(review) => {
            tracing::info!(review_id = %review_id, actor = %actor.username, "Review updated");
            ApiResponse::success(review)
        }
        Err(UpdateReviewError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Review not found"),
        Err(err @ UpdateReviewError::Forbidden) => {
            tracing::warn!(review_id = %review_id, actor = %actor.username, "Review update denied");
            ApiResponse::forbidden("PERMISSION_DENIED", &err.to_string())
        }
        Err(UpdateReviewError::RepositoryError(msg)) => {
            tracing::error!(review_id = %review_id, error = %msg, "Failed to update review");
            ApiResponse::internal_error()
        }
    }
}
