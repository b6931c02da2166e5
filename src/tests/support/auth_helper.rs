use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "yamdb-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// Accepts any bearer token as belonging to `user_id`, or rejects all of them.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }

    /// Ready to pass to `App::app_data`.
    pub fn data_for(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(Self::for_user(user_id));
        web::Data::new(provider)
    }

    pub fn rejecting_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(Self::rejecting());
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("stub-token-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let sub = self.user_id.ok_or(TokenError::InvalidSignature)?;
        Ok(TokenClaims {
            sub,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "yamdb-test".to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        })
    }
}
