//! Token signing configuration

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Issuer label stamped into every token
pub const DEFAULT_ISSUER: &str = "itemvault";

/// Token lifetime in seconds (24 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86400;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
            issuer: String::from(DEFAULT_ISSUER),
        }
    }
}

impl JwtConfig {
    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());
        let token_expiry = match lookup("JWT_TOKEN_EXPIRY") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(seconds) if seconds > 0 && is_representable_lifetime(seconds) => seconds,
                _ => return Err(ConfigError::invalid("JWT_TOKEN_EXPIRY", raw)),
            },
            None => DEFAULT_TOKEN_EXPIRY_SECONDS,
        };

        Ok(Self {
            secret,
            token_expiry,
            issuer: String::from(DEFAULT_ISSUER),
        })
    }
}

/// A lifetime is usable only if a token issued now gets an expiry chrono can
/// represent.
fn is_representable_lifetime(seconds: i64) -> bool {
    Duration::try_seconds(seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .is_some()
}
