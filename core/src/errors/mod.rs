//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}
