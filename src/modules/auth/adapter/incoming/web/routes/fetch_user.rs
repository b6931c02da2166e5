use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{domain::policy::Operation, use_cases::get_user::GetUserError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[get("/api/v1/users/me/")]
pub async fn get_own_profile_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ViewOwnProfile, Some(&actor)) {
        return resp;
    }

    match data.users.get.by_id(actor.id).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetUserError::UserNotFound) => ApiResponse::not_found("NOT_FOUND", "User not found"),
        Err(GetUserError::QueryError(e)) => {
            error!(user_id = %actor.id, error = %e, "Failed to fetch own profile");
            ApiResponse::internal_error()
        }
    }
}
