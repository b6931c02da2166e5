use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    catalog::application::ports::incoming::use_cases::GetTitleError,
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/v1/titles/{title_id}/")]
pub async fn get_title_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let title_id = path.into_inner();

    match data.catalog.get_title.execute(title_id).await {
        Ok(title) => ApiResponse::success(title),
        Err(GetTitleError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Title not found"),
        Err(GetTitleError::QueryError(msg)) => {
            tracing::error!(title_id = %title_id, error = %msg, "Failed to load title");
            ApiResponse::internal_error()
        }
    }
}
