use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::auth::RequiredActor,
    review::application::ports::incoming::use_cases::DeleteReviewError,
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/v1/titles/{title_id}/reviews/{review_id}/")]
pub async fn delete_review_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (title_id, review_id) = path.into_inner();

    match data
        .reviews
        .delete
        .execute(&actor, title_id, review_id)
        .await
    {
        Ok(()) => {
            tracing::info!(review_id = %review_id, actor = %actor.username, "Review deleted");
            ApiResponse::no_content()
        }
        Err(DeleteReviewError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Review not found"),
        Err(err @ DeleteReviewError::Forbidden) => {
            ApiResponse::forbidden("PERMISSION_DENIED", &err.to_string())
        }
        Err(DeleteReviewError::RepositoryError(msg)) => {
            tracing::error!(review_id = %review_id, error = %msg, "Failed to delete review");
            ApiResponse::internal_error()
        }
    }
}
