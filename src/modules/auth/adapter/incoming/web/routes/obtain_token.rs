use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::obtain_token::{
    ObtainTokenCommand, ObtainTokenCommandError, ObtainTokenError, ObtainTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ObtainTokenRequest {
    #[schema(example = "reader@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "K7Q2M9XH4TZP8WRC")]
    #[serde(default)]
    pub confirmation_code: String,
}

/// Exchange a confirmation code for an access token
///
/// Unknown emails get an account provisioned on first successful redemption.
#[utoipa::path(
    post,
    path = "/api/v1/auth/token/",
    tag = "auth",
    request_body = ObtainTokenRequest,
    responses(
        (status = 200, description = "Token issued", body = inline(SuccessResponse<ObtainTokenResponse>)),
        (
            status = 400,
            description = "Missing field or invalid code",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or confirmation code."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/token/")]
pub async fn obtain_token_handler(
    req: web::Json<ObtainTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match ObtainTokenCommand::new(dto.email, dto.confirmation_code) {
        Ok(cmd) => cmd,
        Err(err @ ObtainTokenCommandError::MissingEmail) => {
            return ApiResponse::field_error("email", "VALIDATION_ERROR", &err.to_string())
        }
        Err(err @ ObtainTokenCommandError::MissingCode) => {
            return ApiResponse::field_error(
                "confirmation_code",
                "VALIDATION_ERROR",
                &err.to_string(),
            )
        }
    };

    match data.auth.obtain_token.execute(command).await {
        Ok(response) => ApiResponse::success(response),
        Err(err @ ObtainTokenError::InvalidCredentials) => {
            ApiResponse::bad_request("INVALID_CREDENTIALS", &err.to_string())
        }
        Err(ObtainTokenError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Token redemption failed");
            ApiResponse::internal_error()
        }
        Err(ObtainTokenError::TokenGenerationFailed(e)) => {
            tracing::error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
