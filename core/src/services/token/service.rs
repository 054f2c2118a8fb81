//! Main token service implementation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service for issuing and verifying stateless signed tokens
///
/// Nothing is stored server-side: a token is valid exactly when its
/// signature matches the configured secret, its claims have the expected
/// shape and issuer, and its expiry has not passed.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration, including the signing secret
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against an explicit clock in `verify_at`.
        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token for `subject`, valid from now for the configured lifetime
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The serialized token
    /// * `Err(TokenError::TokenGenerationFailed)` - The configured lifetime does
    ///   not produce a representable expiry, or the signing primitive failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a token for `subject` as if the current time were `now`
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = self
            .config
            .token_ttl()
            .and_then(|ttl| Claims::new(subject, self.config.issuer.as_str(), now, ttl))
            .ok_or(TokenError::TokenGenerationFailed)?;
        self.encode_jwt(&claims)
    }

    /// Verifies a token and returns its subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The subject the token was issued for
    /// * `Err(TokenError::InvalidTokenFormat)` - Not a token of the expected shape
    /// * `Err(TokenError::InvalidSignature)` - Signed with another secret or tampered
    /// * `Err(TokenError::TokenExpired)` - The expiry instant has passed
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims.sub)
    }

    /// Checks signature, shape and issuer, and returns the claims without
    /// looking at expiry
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ if self.names_other_algorithm(token) => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            })
    }

    /// True when the header segment is readable JSON whose `alg` differs from
    /// the configured algorithm. Covers names such as `none` that the JWT
    /// library refuses to parse at all.
    fn names_other_algorithm(&self, token: &str) -> bool {
        let Some(encoded) = token.split('.').next() else {
            return false;
        };

        URL_SAFE_NO_PAD
            .decode(encoded)
            .ok()
            .and_then(|bytes| serde_json::from_slice::<RawHeader>(&bytes).ok())
            .is_some_and(|header| header.alg != algorithm_name(self.config.algorithm))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }
}

/// Just enough of a JOSE header to read the algorithm name
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

fn algorithm_name(algorithm: Algorithm) -> String {
    format!("{:?}", algorithm)
}
