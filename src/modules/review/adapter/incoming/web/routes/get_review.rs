use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    review::application::ports::incoming::use_cases::GetReviewError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/v1/titles/{title_id}/reviews/{review_id}/")]
pub async fn get_review_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (title_id, review_id) = path.into_inner();

    match data.reviews.get_single.execute(title_id, review_id).await {
        Ok(review) => ApiResponse::success(review),
        Err(GetReviewError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Review not found"),
        Err(GetReviewError::QueryError(msg)) => {
            tracing::error!(review_id = %review_id, error = %msg, "Failed to load review");
            ApiResponse::internal_error()
        }
    }
}
