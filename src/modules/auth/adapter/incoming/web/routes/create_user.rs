use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{
            domain::{entities::Role, policy::Operation},
            use_cases::create_user::{CreateUserCommand, CreateUserError},
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Option<Role>,
}

#[post("/api/v1/users/")]
pub async fn create_user_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ManageUsers, Some(&actor)) {
        return resp;
    }
    let req = payload.into_inner();

    let command = match CreateUserCommand::new(
        req.username,
        req.email,
        req.first_name,
        req.last_name,
        req.bio,
        req.role,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
        }
    };

    match data.users.create.execute(command).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, admin = %actor.username, "User created by admin");
            ApiResponse::created(user)
        }
        Err(err) => map_create_user_error(err),
    }
}

fn map_create_user_error(err: CreateUserError) -> HttpResponse {
    match err {
        CreateUserError::UsernameAlreadyExists => {
            ApiResponse::field_error("username", "USERNAME_TAKEN", &err.to_string())
        }
        CreateUserError::EmailAlreadyExists => {
            ApiResponse::field_error("email", "EMAIL_TAKEN", &err.to_string())
        }
        CreateUserError::RepositoryError(e) => {
            tracing::error!(error = %e, "Failed to create user");
            ApiResponse::internal_error()
        }
    }
}
