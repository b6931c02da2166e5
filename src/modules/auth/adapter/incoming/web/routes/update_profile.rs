use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{
            domain::policy::Operation,
            use_cases::update_profile::{UpdateProfileCommand, UpdateProfileError},
        },
    },
    shared::api::ApiResponse,
    AppState,
};

/// Unknown keys (`role`, `username`, `email`) are dropped by serde.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

#[patch("/api/v1/users/me/")]
pub async fn update_own_profile_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::UpdateOwnProfile, Some(&actor)) {
        return resp;
    }
    let req = payload.into_inner();

    let command = match UpdateProfileCommand::new(req.first_name, req.last_name, req.bio) {
        Ok(cmd) => cmd,
        Err(err) => {
            return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
        }
    };

    match data.users.update_profile.execute(actor.id, command).await {
        Ok(user) => ApiResponse::success(user),
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %actor.id, error = %e, "Failed to update own profile");
            ApiResponse::internal_error()
        }
    }
}
