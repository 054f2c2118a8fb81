//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;
use iv_shared::config::auth::{DEFAULT_ISSUER, DEFAULT_JWT_SECRET, DEFAULT_TOKEN_EXPIRY_SECONDS};
use iv_shared::config::JwtConfig;

/// Configuration for the token service
///
/// The secret is injected here rather than read from process-wide state, so
/// several services with different secrets can coexist.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token expiry in seconds
    pub token_expiry_seconds: i64,
    /// Issuer label stamped into and required from every token
    pub issuer: String,
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secret and default lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Token lifetime as a duration, or `None` if it is out of range
    pub fn token_ttl(&self) -> Option<Duration> {
        Duration::try_seconds(self.token_expiry_seconds)
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: jwt.token_expiry,
            issuer: jwt.issuer.clone(),
        }
    }
}
