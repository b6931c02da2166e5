use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    catalog::application::ports::{
        incoming::use_cases::GetTitlesError, outgoing::TitleFilter,
    },
    shared::api::{ApiResponse, PageQuery},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct TitlesQuery {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    per_page: u32,
    genre: Option<String>,
    category: Option<String>,
    year: Option<i32>,
    name: Option<String>,
}

#[get("/api/v1/titles/")]
pub async fn get_titles_handler(
    data: web::Data<AppState>,
    query: web::Query<TitlesQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageQuery {
        page: query.page,
        per_page: query.per_page,
    };
    let filter = TitleFilter {
        genre: query.genre,
        category: query.category,
        year: query.year,
        name: query.name,
    };

    match data.catalog.get_titles.execute(filter, page.into()).await {
        Ok(result) => ApiResponse::success(result),
        Err(GetTitlesError::QueryError(msg)) => {
            tracing::error!(error = %msg, "Failed to list titles");
            ApiResponse::internal_error()
        }
    }
}
