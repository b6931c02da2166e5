use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    review::application::ports::incoming::use_cases::GetReviewsError,
    shared::api::{ApiResponse, PageQuery},
    AppState,
};

#[get("/api/v1/titles/{title_id}/reviews/")]
pub async fn get_reviews_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let title_id = path.into_inner();

    match data
        .reviews
        .get_list
        .execute(title_id, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(GetReviewsError::TitleNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Title not found")
        }
        Err(GetReviewsError::QueryError(msg)) => {
            tracing::error!(title_id = %title_id, error = %msg, "Failed to list reviews");
            ApiResponse::internal_error()
        }
    }
}
