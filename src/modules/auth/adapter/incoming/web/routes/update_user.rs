use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{
            domain::{entities::Role, policy::Operation},
            use_cases::update_user::{UpdateUserCommand, UpdateUserError},
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Option<Role>,
}

#[patch("/api/v1/users/{username}/")]
pub async fn update_user_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ManageUsers, Some(&actor)) {
        return resp;
    }
    let username = path.into_inner();
    let req = payload.into_inner();

    let command = match UpdateUserCommand::new(
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

    match data.users.update.execute(&username, command).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, admin = %actor.username, "User updated by admin");
            ApiResponse::success(user)
        }
        Err(err) => map_update_user_error(&username, err),
    }
}

fn map_update_user_error(username: &str, err: UpdateUserError) -> HttpResponse {
    match err {
        UpdateUserError::UserNotFound => ApiResponse::not_found("NOT_FOUND", "User not found"),
        UpdateUserError::UsernameAlreadyExists => {
            ApiResponse::field_error("username", "USERNAME_TAKEN", &err.to_string())
        }
        UpdateUserError::EmailAlreadyExists => {
            ApiResponse::field_error("email", "EMAIL_TAKEN", &err.to_string())
        }
        UpdateUserError::RepositoryError(e) => {
            tracing::error!(username = %username, error = %e, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::auth::application::ports::outgoing::CreateUserData;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::StubTokenProvider;
    use crate::tests::support::in_memory::InMemoryUsers;

    #[actix_web::test]
    async fn admin_promotes_user() {
        // Arrange
        let users = InMemoryUsers::default();
        let admin = users.insert_with_role("admin@x.com", Role::Admin);
        users.insert(CreateUserData::from_email("ann@x.com"));
        let state = TestAppStateBuilder::default().with_users(users.clone()).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::data_for(admin.id.value()))
                .service(update_user_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::patch()
            .uri("/api/v1/users/ann@x.com/")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({"role": "moderator", "bio": "Film buff"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let ann = users
            .all()
            .into_iter()
            .find(|u| u.username == "ann@x.com")
            .unwrap();
        assert_eq!(ann.role, Role::Moderator);
        assert_eq!(ann.bio, "Film buff");
    }

    #[actix_web::test]
    async fn taking_existing_username_is_field_error() {
        let users = InMemoryUsers::default();
        let admin = users.insert_with_role("admin@x.com", Role::Admin);
        users.insert(CreateUserData::from_email("ann@x.com"));
        let state = TestAppStateBuilder::default().with_users(users).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::data_for(admin.id.value()))
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/v1/users/ann@x.com/")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({"username": "admin@x.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["field"], "username");
    }
}
