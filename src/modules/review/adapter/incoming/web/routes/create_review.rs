use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::domain::policy::Operation,
    },
    review::application::ports::incoming::use_cases::{CreateReviewCommand, CreateReviewError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub score: Option<i16>,
}

#[post("/api/v1/titles/{title_id}/reviews/")]
pub async fn create_review_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CreateReviewRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::CreateReview, Some(&actor)) {
        return resp;
    }
    let title_id = path.into_inner();

    let command = match CreateReviewCommand::new(title_id, actor.id, &payload.text, payload.score)
    {
        Ok(cmd) => cmd,
        Err(err) => {
            return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
        }
    };

    match data.reviews.create.execute(command).await {
        Ok(review) => {
            tracing::info!(
                title_id = %title_id,
                review_id = %review.id,
                author = %actor.username,
                "Review created"
            );
            ApiResponse::created(review)
        }
        Err(err) => map_create_review_error(title_id, err),
    }
}

fn map_create_review_error(title_id: Uuid, err: CreateReviewError) -> HttpResponse {
    match err {
        CreateReviewError::TitleNotFound => ApiResponse::not_found("NOT_FOUND", "Title not found"),
        CreateReviewError::AlreadyReviewed => ApiResponse::bad_request(
            "ALREADY_REVIEWED",
            "You have already reviewed this title.",
        ),
        CreateReviewError::RepositoryError(msg) => {
            tracing::error!(title_id = %title_id, error = %msg, "Failed to create review");
            ApiResponse::internal_error()
        }
    }
}
