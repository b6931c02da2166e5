use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::policy::{authorize, Actor, Decision, Operation};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::{shared::api::ApiResponse, AppState};

/// Bearer token holder; the user may no longer exist.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != ACCESS_TOKEN_TYPE {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Authenticated caller loaded from the user store, so role changes apply
/// immediately.
#[derive(Debug, Clone)]
pub struct RequiredActor(pub Actor);

impl FromRequest for RequiredActor {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload).into_inner();
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let authenticated = authenticated?;
            let state =
                state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            match state
                .user_query
                .find_by_id(UserId::from(authenticated.user_id))
                .await
            {
                Ok(Some(user)) => Ok(RequiredActor(Actor::from(&user))),
                Ok(None) => Err(create_api_error(ApiResponse::unauthorized(
                    "USER_NOT_FOUND",
                    "Token owner no longer exists",
                ))),
                Err(e) => {
                    tracing::error!(
                        user_id = %authenticated.user_id,
                        error = %e,
                        "Failed to load token owner"
                    );
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// Like [`RequiredActor`] for public endpoints: no header means anonymous,
/// but a bad token is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalActor(pub Option<Actor>);

impl FromRequest for OptionalActor {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.headers().get("Authorization").is_none() {
            return Box::pin(async { Ok(OptionalActor(None)) });
        }

        let required = RequiredActor::from_request(req, payload);
        Box::pin(async move { required.await.map(|RequiredActor(actor)| OptionalActor(Some(actor))) })
    }
}

/// Maps the policy decision for `operation` to a 401/403 response.
pub fn guard(operation: Operation, actor: Option<&Actor>) -> Result<(), HttpResponse> {
    match authorize(operation, actor, None) {
        Decision::Allow => Ok(()),
        Decision::Unauthenticated => Err(ApiResponse::unauthorized(
            "NOT_AUTHENTICATED",
            "Authentication credentials were not provided",
        )),
        Decision::Forbidden => Err(ApiResponse::forbidden(
            "PERMISSION_DENIED",
            "You do not have permission to perform this action",
        )),
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
