use actix_web::{delete, route, web, HttpResponse, Responder};

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::domain::policy::Operation,
    },
    catalog::application::{
        domain::entities::VocabularyKind, ports::incoming::use_cases::DeleteTermError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[delete("/api/v1/categories/{slug}/")]
pub async fn delete_category_handler(
    actor: RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    delete_term(VocabularyKind::Category, actor, data, path.into_inner()).await
}

#[delete("/api/v1/genres/{slug}/")]
pub async fn delete_genre_handler(
    actor: RequiredActor,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    delete_term(VocabularyKind::Genre, actor, data, path.into_inner()).await
}

/// Single terms are not readable or editable.
#[route("/api/v1/categories/{slug}/", method = "GET", method = "PATCH", method = "PUT")]
pub async fn category_detail_not_allowed() -> impl Responder {
    ApiResponse::method_not_allowed()
}

#[route("/api/v1/genres/{slug}/", method = "GET", method = "PATCH", method = "PUT")]
pub async fn genre_detail_not_allowed() -> impl Responder {
    ApiResponse::method_not_allowed()
}

async fn delete_term(
    kind: VocabularyKind,
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    slug: String,
) -> HttpResponse {
    if let Err(resp) = guard(Operation::DeleteTerm, Some(&actor)) {
        return resp;
    }

    match data.catalog.delete_term.execute(kind, &slug).await {
        Ok(()) => {
            tracing::info!(kind = %kind, slug = %slug, actor = %actor.username, "Vocabulary term deleted");
            ApiResponse::no_content()
        }
        Err(err @ DeleteTermError::NotFound(_)) => {
            ApiResponse::not_found("NOT_FOUND", &err.to_string())
        }
        Err(DeleteTermError::RepositoryError(msg)) => {
            tracing::error!(kind = %kind, slug = %slug, error = %msg, "Failed to delete vocabulary term");
            ApiResponse::internal_error()
        }
    }
}
