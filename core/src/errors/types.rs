//! Domain-specific error types for token handling and input validation
//!
//! Each variant is a distinct internal diagnosis. The presentation layer
//! decides how much of that distinction reaches clients.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The presented string is not a token of the expected shape
    #[error("Invalid token format")]
    InvalidTokenFormat,

    /// The signature does not match the configured secret
    #[error("Invalid signature")]
    InvalidSignature,

    /// The token was valid but its expiry instant has passed
    #[error("Token expired")]
    TokenExpired,

    /// The signing primitive failed while minting a token
    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// True for the kinds produced by verification, as opposed to issuance
    pub fn is_verification_failure(&self) -> bool {
        !matches!(self, TokenError::TokenGenerationFailed)
    }
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },
}
