use actix_web::{delete, web, Responder};

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{domain::policy::Operation, use_cases::delete_user::DeleteUserError},
    },
    shared::api::ApiResponse,
    AppState,
};

/// Removes the account with its reviews and comments.
#[delete("/api/v1/users/{username}/")]
pub async fn delete_user_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ManageUsers, Some(&actor)) {
        return resp;
    }
    let username = path.into_inner();

    match data.users.delete.execute(&username).await {
        Ok(()) => {
            tracing::info!(username = %username, admin = %actor.username, "User deleted");
            ApiResponse::no_content()
        }
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::RepositoryError(e)) => {
            tracing::error!(username = %username, error = %e, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
