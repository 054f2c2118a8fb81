//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the identity the token asserts)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for `subject` issued at `issued_at` and valid for `ttl`
    ///
    /// # Arguments
    ///
    /// * `subject` - The identity the token asserts
    /// * `issuer` - Issuer label stamped into the token
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime of the token
    ///
    /// Returns `None` when the expiry instant is not representable.
    pub fn new(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Option<Self> {
        let expiry = issued_at.checked_add_signed(ttl)?;

        Some(Self {
            sub: subject.into(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Checks whether the claims have expired at `now`
    ///
    /// The expiry instant itself is still valid; only instants strictly
    /// after `exp` are expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}
