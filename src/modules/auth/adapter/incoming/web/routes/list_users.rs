use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::{
    auth::{
        adapter::incoming::web::extractors::auth::{guard, RequiredActor},
        application::{
            domain::policy::Operation, ports::outgoing::UserListFilter,
            use_cases::list_users::ListUsersError,
        },
    },
    shared::api::{ApiResponse, PageQuery},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    per_page: u32,
    search: Option<String>,
}

#[get("/api/v1/users/")]
pub async fn list_users_handler(
    RequiredActor(actor): RequiredActor,
    data: web::Data<AppState>,
    query: web::Query<ListUsersQuery>,
) -> impl Responder {
    if let Err(resp) = guard(Operation::ManageUsers, Some(&actor)) {
        return resp;
    }
    let query = query.into_inner();
    let page = PageQuery {
        page: query.page,
        per_page: query.per_page,
    };
    let filter = UserListFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
    };

    match data.users.list.execute(filter, page.into()).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListUsersError::QueryError(e)) => {
            tracing::error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
