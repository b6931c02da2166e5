use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::request_confirmation_code::{
    RequestCodeCommand, RequestCodeError, RequestCodeOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RequestCodeRequest {
    #[schema(example = "reader@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct RequestCodeResponse {
    #[schema(example = "reader@example.com")]
    pub email: String,
    /// Whether the confirmation email actually went out.
    pub delivered: bool,
    #[schema(example = "Check your email inbox (reader@example.com) for confirmation.")]
    pub message: String,
}

impl From<RequestCodeOutcome> for RequestCodeResponse {
    fn from(outcome: RequestCodeOutcome) -> Self {
        let message = outcome.message();
        match outcome {
            RequestCodeOutcome::Delivered { email } => Self {
                email,
                delivered: true,
                message,
            },
            RequestCodeOutcome::DeliveryFailed { email } => Self {
                email,
                delivered: false,
                message,
            },
        }
    }
}

/// Request a confirmation code
///
/// Issues (or reissues) a confirmation code for the email and mails it.
/// A failed delivery still answers 200 with an explanatory message.
#[utoipa::path(
    post,
    path = "/api/v1/auth/email/",
    tag = "auth",
    request_body = RequestCodeRequest,
    responses(
        (status = 200, description = "Code issued", body = inline(SuccessResponse<RequestCodeResponse>)),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/email/")]
pub async fn request_code_handler(
    req: web::Json<RequestCodeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match RequestCodeCommand::new(req.into_inner().email) {
        Ok(cmd) => cmd,
        Err(err) => {
            return ApiResponse::field_error(err.field(), "VALIDATION_ERROR", &err.to_string())
        }
    };

    match data.auth.request_code.execute(command).await {
        Ok(outcome) => ApiResponse::success(RequestCodeResponse::from(outcome)),
        Err(RequestCodeError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to issue confirmation code");
            ApiResponse::internal_error()
        }
    }
}
