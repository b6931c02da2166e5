use std::env;

/// HS256 signing settings for access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds
    pub access_token_expiry: i64,
}

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 1800;
const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ACCESS_EXPIRY` and `JWT_ISSUER`.
    /// Misconfiguration aborts startup.
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        if secret_key.len() < MIN_SECRET_LEN {
            panic!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long");
        }

        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .unwrap_or_else(|_| panic!("Invalid JWT_ACCESS_EXPIRY value: {raw}")),
            Err(_) => DEFAULT_ACCESS_EXPIRY_SECS,
        };
        if !(1..=MAX_ACCESS_EXPIRY_SECS).contains(&access_token_expiry) {
            panic!("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY_SECS} seconds");
        }

        Self {
            secret_key,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "yamdb".to_string()),
            access_token_expiry,
        }
    }
}
