use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    ObtainTokenRequest, RequestCodeRequest, RequestCodeResponse,
};
use crate::auth::application::use_cases::obtain_token::ObtainTokenResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "YamDB API",
        version = "1.0.0",
        description = "Reviews of films, books and music: catalog, reviews, comments and passwordless sign-in",
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::request_code::request_code_handler,
        crate::auth::adapter::incoming::web::routes::obtain_token::obtain_token_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            RequestCodeRequest,
            RequestCodeResponse,
            ObtainTokenRequest,
            ObtainTokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Confirmation codes and access tokens"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from /api/v1/auth/token/"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_auth_endpoints() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/v1/auth/email/"));
        assert!(doc.paths.paths.contains_key("/api/v1/auth/token/"));
    }
}
