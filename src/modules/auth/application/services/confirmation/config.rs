use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationConfig {
    /// Seconds a code stays redeemable after issue.
    pub code_ttl_seconds: i64,
    /// When false a code may be redeemed any number of times within its TTL.
    pub single_use: bool,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 900,
            single_use: true,
        }
    }
}

/// 30 days
pub const MAX_CODE_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

impl ConfirmationConfig {
    /// Misconfiguration aborts startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let code_ttl_seconds = env::var("CONFIRMATION_CODE_TTL")
            .ok()
            .map(|v| parse_ttl(&v).unwrap_or_else(|e| panic!("CONFIRMATION_CODE_TTL: {e}")))
            .unwrap_or(defaults.code_ttl_seconds);

        let single_use = env::var("CONFIRMATION_SINGLE_USE")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.single_use);

        Self {
            code_ttl_seconds,
            single_use,
        }
    }
}

fn parse_ttl(value: &str) -> Result<i64, String> {
    let seconds = value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid value {value:?}"))?;
    if !(1..=MAX_CODE_TTL_SECONDS).contains(&seconds) {
        return Err(format!(
            "must be between 1 and {MAX_CODE_TTL_SECONDS} seconds, got {seconds}"
        ));
    }
    Ok(seconds)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
