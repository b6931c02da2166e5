use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{
    catalog::application::{
        domain::entities::VocabularyKind, ports::incoming::use_cases::GetTermsError,
    },
    shared::api::{ApiResponse, PageQuery},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListTermsQuery {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    per_page: u32,
    search: Option<String>,
}

#[get("/api/v1/categories/")]
pub async fn list_categories_handler(
    data: web::Data<AppState>,
    query: web::Query<ListTermsQuery>,
) -> impl Responder {
    list_terms(VocabularyKind::Category, data, query.into_inner()).await
}

#[get("/api/v1/genres/")]
pub async fn list_genres_handler(
    data: web::Data<AppState>,
    query: web::Query<ListTermsQuery>,
) -> impl Responder {
    list_terms(VocabularyKind::Genre, data, query.into_inner()).await
}

async fn list_terms(
    kind: VocabularyKind,
    data: web::Data<AppState>,
    query: ListTermsQuery,
) -> HttpResponse {
    let page = PageQuery {
        page: query.page,
        per_page: query.per_page,
    };

    match data
        .catalog
        .get_terms
        .execute(kind, query.search, page.into())
        .await
    {
        Ok(result) => ApiResponse::success(result),
        Err(GetTermsError::QueryError(msg)) => {
            tracing::error!(kind = %kind, error = %msg, "Failed to list vocabulary");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::catalog::application::domain::entities::Term;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryCatalog;

    #[actix_web::test]
    async fn lists_genres_sorted_with_exact_search() {
        // Arrange
        let catalog = InMemoryCatalog::default();
        catalog.add_term(VocabularyKind::Genre, "Drama", "drama");
        catalog.add_term(VocabularyKind::Genre, "Comedy", "comedy");
        catalog.add_term(VocabularyKind::Genre, "Dramedy", "dramedy");
        let state = TestAppStateBuilder::default().with_catalog(&catalog).build();
        let app = test::init_service(App::new().app_data(state).service(list_genres_handler)).await;

        // Act
        let all = test::TestRequest::get().uri("/api/v1/genres/").to_request();
        let all: serde_json::Value = test::call_and_read_body_json(&app, all).await;
        let exact = test::TestRequest::get()
            .uri("/api/v1/genres/?search=Drama")
            .to_request();
        let exact: serde_json::Value = test::call_and_read_body_json(&app, exact).await;

        // Assert
        let names: Vec<&str> = all["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Comedy", "Drama", "Dramedy"]);
        assert_eq!(exact["data"]["total"], 1);
        assert_eq!(exact["data"]["items"][0]["slug"], "drama");
    }

    #[actix_web::test]
    async fn categories_are_public_and_paginated() {
        let catalog = InMemoryCatalog::default();
        for i in 0..3 {
            catalog.add_term(VocabularyKind::Category, &format!("Cat {i}"), &format!("cat-{i}"));
        }
        let state = TestAppStateBuilder::default().with_catalog(&catalog).build();
        let app =
            test::init_service(App::new().app_data(state).service(list_categories_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/categories/?page=2&per_page=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["total"], 3);
        assert_eq!(body["data"]["page"], 2);
        let items: Vec<Term> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| Term {
                name: t["name"].as_str().unwrap().to_string(),
                slug: t["slug"].as_str().unwrap().to_string(),
            })
            .collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "cat-2");
    }
}
