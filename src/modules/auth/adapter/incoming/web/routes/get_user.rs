use actix_web::{get, web, Responder};

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{domain::policy::Operation, use_cases::get_user::GetUserError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/v1/users/{username}/")]
pub async fn get_user_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ManageUsers, Some(&actor)) {
        return resp;
    }
    let username = path.into_inner();

    match data.users.get.by_username(&username).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetUserError::UserNotFound) => ApiResponse::not_found("NOT_FOUND", "User not found"),
        Err(GetUserError::QueryError(e)) => {
            tracing::error!(username = %username, error = %e, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}
