use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::domain::policy::Operation,
    },
    catalog::application::{
        domain::entities::VocabularyKind,
        ports::incoming::use_cases::{CreateTermCommand, CreateTermError},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateTermRequest {
    pub name: String,
    pub slug: String,
}

#[post("/api/v1/categories/")]
pub async fn create_category_handler(
    actor: RequiredActor,
    data: web::Data<AppState>,
    payload: web::Json<CreateTermRequest>,
) -> impl Responder {
    create_term(VocabularyKind::Category, actor, data, payload.into_inner()).await
}

#[post("/api/v1/genres/")]
pub async fn create_genre_handler(
    actor: RequiredActor,
    data: web::Data<AppState>,
    payload: web::Json<CreateTermRequest>,
) -> impl Responder {
    create_term(VocabularyKind::Genre, actor, data, payload.into_inner()).await
}

async fn create_term(
    kind: VocabularyKind,
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    payload: CreateTermRequest,
) -> HttpResponse {
    if let Err(resp) = guard(Operation::CreateTerm, Some(&actor)) {
        return resp;
    }

    let command = match CreateTermCommand::new(kind, &payload.name, &payload.slug) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string()),
    };

    match data.catalog.create_term.execute(command).await {
        Ok(term) => {
            tracing::info!(kind = %kind, slug = %term.slug, actor = %actor.username, "Vocabulary term created");
            ApiResponse::created(term)
        }
        Err(err @ CreateTermError::SlugTaken(_)) => {
            ApiResponse::field_error("slug", "SLUG_TAKEN", &err.to_string())
        }
        Err(CreateTermError::RepositoryError(msg)) => {
            tracing::error!(kind = %kind, error = %msg, "Failed to create vocabulary term");
            ApiResponse::internal_error()
        }
    }
}
