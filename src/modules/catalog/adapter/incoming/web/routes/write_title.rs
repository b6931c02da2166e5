//! Admin-only title writes: create, replace (PUT), patch and delete.

use actix_web::{delete, patch, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::domain::policy::Operation,
    },
    catalog::application::{
        domain::entities::CatalogFieldError,
        ports::incoming::use_cases::{
            CreateTitleError, DeleteTitleError, PatchTitleCommand, TitleCommand, UpdateTitleError,
        },
    },
    shared::{api::ApiResponse, patch::PatchField},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
}

impl TitleRequest {
    fn into_command(self) -> Result<TitleCommand, CatalogFieldError> {
        TitleCommand::new(
            &self.name,
            self.year,
            self.description,
            self.category,
            self.genre,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct PatchTitleRequest {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    pub genre: Option<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

#[post("/api/v1/titles/")]
pub async fn create_title_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    payload: web::Json<TitleRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::CreateTitle, Some(&actor)) {
        return resp;
    }

    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_field_error(err),
    };

    match data.catalog.create_title.execute(command).await {
        Ok(title) => {
            tracing::info!(title_id = %title.id, actor = %actor.username, "Title created");
            ApiResponse::created(title)
        }
        Err(CreateTitleError::UnknownCategory(slug)) => unknown_category(&slug),
        Err(CreateTitleError::UnknownGenre(slug)) => unknown_genre(&slug),
        Err(CreateTitleError::RepositoryError(msg)) => {
            tracing::error!(error = %msg, "Failed to create title");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/v1/titles/{title_id}/")]
pub async fn replace_title_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<TitleRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ReplaceTitle, Some(&actor)) {
        return resp;
    }
    let title_id = path.into_inner();

    let command = match payload.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(err) => return map_field_error(err),
    };

    match data.catalog.replace_title.execute(title_id, command).await {
        Ok(title) => ApiResponse::success(title),
        Err(err) => map_update_error(title_id, err),
    }
}

#[patch("/api/v1/titles/{title_id}/")]
pub async fn patch_title_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<PatchTitleRequest>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::PatchTitle, Some(&actor)) {
        return resp;
    }
    let title_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match PatchTitleCommand::new(
        payload.name.as_deref(),
        payload.year,
        payload.description,
        payload.category,
        payload.genre,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_field_error(err),
    };

    match data.catalog.patch_title.execute(title_id, command).await {
        Ok(title) => ApiResponse::success(title),
        Err(err) => map_update_error(title_id, err),
    }
}

#[delete("/api/v1/titles/{title_id}/")]
pub async fn delete_title_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::DeleteTitle, Some(&actor)) {
        return resp;
    }
    let title_id = path.into_inner();

    match data.catalog.delete_title.execute(title_id).await {
        Ok(()) => {
            tracing::info!(title_id = %title_id, actor = %actor.username, "Title deleted");
            ApiResponse::no_content()
        }
        Err(DeleteTitleError::NotFound) => ApiResponse::not_found("NOT_FOUND", "Title not found"),
        Err(DeleteTitleError::RepositoryError(msg)) => {
            tracing::error!(title_id = %title_id, error = %msg, "Failed to delete title");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_field_error(err: CatalogFieldError) -> HttpResponse {
    ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
}

fn unknown_category(slug: &str) -> HttpResponse {
    ApiResponse::field_error(
        "category",
        "UNKNOWN_CATEGORY",
        &format!("Category with slug '{slug}' does not exist"),
    )
}

fn unknown_genre(slug: &str) -> HttpResponse {
    ApiResponse::field_error(
        "genre",
        "UNKNOWN_GENRE",
        &format!("Genre with slug '{slug}' does not exist"),
    )
}

fn map_update_error(title_id: Uuid, err: UpdateTitleError) -> HttpResponse {
    match err {
        UpdateTitleError::NotFound => ApiResponse::not_found("NOT_FOUND", "Title not found"),
        UpdateTitleError::UnknownCategory(slug) => unknown_category(&slug),
        UpdateTitleError::UnknownGenre(slug) => unknown_genre(&slug),
        UpdateTitleError::RepositoryError(msg) => {
            tracing::error!(title_id = %title_id, error = %msg, "Failed to update title");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::{Datelike, Utc};

    use crate::auth::application::domain::entities::Role;
    use crate::catalog::application::domain::entities::VocabularyKind;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::StubTokenProvider;
    use crate::tests::support::in_memory::{InMemoryCatalog, InMemoryUsers};

    struct Fixture {
        catalog: InMemoryCatalog,
        users: InMemoryUsers,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = InMemoryCatalog::default();
            catalog.add_term(VocabularyKind::Category, "Film", "movie");
            catalog.add_term(VocabularyKind::Genre, "Drama", "drama");
            catalog.add_term(VocabularyKind::Genre, "Comedy", "comedy");
            Self {
                catalog,
                users: InMemoryUsers::default(),
            }
        }

        fn state(&self) -> web::Data<AppState> {
            TestAppStateBuilder::default()
                .with_users(self.users.clone())
                .with_catalog(&self.catalog)
                .build()
        }
    }

    macro_rules! app_as {
        ($fixture:expr, $user_id:expr) => {
            test::init_service(
                App::new()
                    .app_data($fixture.state())
                    .app_data(StubTokenProvider::data_for($user_id))
                    .service(create_title_handler)
                    .service(replace_title_handler)
                    .service(patch_title_handler)
                    .service(delete_title_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn admin_creates_title_with_terms() {
        // Arrange
        let fixture = Fixture::new();
        let admin = fixture.users.insert_with_role("admin@x.com", Role::Admin);
        let app = app_as!(fixture, admin.id.value());

        // Act
        let req = test::TestRequest::post()
            .uri("/api/v1/titles/")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({
                "name": "Amelie",
                "year": 2001,
                "category": "movie",
                "genre": ["drama", "comedy"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"]["rating"].is_null());
        assert_eq!(body["data"]["category"]["slug"], "movie");
        assert_eq!(body["data"]["genre"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn future_year_and_unknown_genre_are_field_errors() {
        let fixture = Fixture::new();
        let admin = fixture.users.insert_with_role("admin@x.com", Role::Admin);
        let app = app_as!(fixture, admin.id.value());
        let next_year = Utc::now().year() + 1;

        let cases = [
            (serde_json::json!({"name": "Soon", "year": next_year}), "year"),
            (
                serde_json::json!({"name": "Odd", "year": 1990, "genre": ["western"]}),
                "genre",
            ),
            (
                serde_json::json!({"name": "Odd", "year": 1990, "category": "opera"}),
                "category",
            ),
        ];

        for (payload, field) in cases {
            let req = test::TestRequest::post()
                .uri("/api/v1/titles/")
                .insert_header(("Authorization", "Bearer t"))
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["field"], field);
        }
    }

    #[actix_web::test]
    async fn moderator_cannot_write_titles() {
        let fixture = Fixture::new();
        let moderator = fixture
            .users
            .insert_with_role("mod@x.com", Role::Moderator);
        let title_id = fixture.catalog.add_title("Dune", 1984, None, &[]);
        let app = app_as!(fixture, moderator.id.value());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/titles/{title_id}/"))
            .insert_header(("Authorization", "Bearer t"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(fixture.catalog.has_title(title_id));
    }

    #[actix_web::test]
    async fn patch_clears_category_and_keeps_rest() {
        // Arrange
        let fixture = Fixture::new();
        let admin = fixture.users.insert_with_role("admin@x.com", Role::Admin);
        let title_id = fixture
            .catalog
            .add_title("Amelie", 2001, Some("movie"), &["drama"]);
        let app = app_as!(fixture, admin.id.value());

        // Act
        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/titles/{title_id}/"))
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({"category": null}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"]["category"].is_null());
        assert_eq!(body["data"]["genre"][0]["slug"], "drama");
        assert_eq!(body["data"]["name"], "Amelie");
    }

    #[actix_web::test]
    async fn put_replaces_every_field() {
        let fixture = Fixture::new();
        let admin = fixture.users.insert_with_role("admin@x.com", Role::Admin);
        let title_id = fixture
            .catalog
            .add_title("Amelie", 2001, Some("movie"), &["drama"]);
        let app = app_as!(fixture, admin.id.value());

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/titles/{title_id}/"))
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({"name": "Amélie", "year": 2001}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Amélie");
        assert!(body["data"]["category"].is_null());
        assert!(body["data"]["genre"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_missing_title_is_not_found() {
        let fixture = Fixture::new();
        let admin = fixture.users.insert_with_role("admin@x.com", Role::Admin);
        let app = app_as!(fixture, admin.id.value());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/titles/{}/", Uuid::new_v4()))
            .insert_header(("Authorization", "Bearer t"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
