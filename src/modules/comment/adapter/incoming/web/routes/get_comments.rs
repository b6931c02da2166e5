use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    comment::application::ports::incoming::use_cases::{GetCommentError, GetCommentsError},
    shared::api::{ApiResponse, PageQuery},
    AppState,
};

#[get("/api/v1/titles/{title_id}/reviews/{review_id}/comments/")]
pub async fn get_comments_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let (title_id, review_id) = path.into_inner();

    match data
        .comments
        .get_list
        .execute(title_id, review_id, query.into_inner().into())
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(GetCommentsError::ReviewNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Review not found")
        }
        Err(GetCommentsError::QueryError(msg)) => {
            tracing::error!(review_id = %review_id, error = %msg, "Failed to list comments");
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/v1/titles/{title_id}/reviews/{review_id}/comments/{comment_id}/")]
pub async fn get_comment_handler(
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid, Uuid)>,
) -> impl Responder {
    let (title_id, review_id, comment_id) = path.into_inner();

    match data
        .comments
        .get_single
        .execute(title_id, review_id, comment_id)
        .await
    {
        Ok(comment) => ApiResponse::success(comment),
        Err(GetCommentError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Comment not found"),
        Err(GetCommentError::QueryError(msg)) => {
            tracing::error!(comment_id = %comment_id, error = %msg, "Failed to fetch comment");
            ApiResponse::internal_error()
        }
    }
}
