//! Conversion of domain errors into HTTP responses
//!
//! Every token verification failure collapses into the same 401 body; the
//! specific kind only reaches the logs.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use iv_core::errors::{DomainError, ValidationError};
use iv_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";
pub const MISSING_AUTH_HEADER_MESSAGE: &str = "Authorization header required";
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) if token_error.is_verification_failure() => {
            log::warn!("Token verification failed: {}", token_error);
            unauthorized_response(INVALID_TOKEN_MESSAGE)
        }
        DomainError::Token(token_error) => {
            log::error!("Domain Error: {:?}", token_error);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "Failed to generate token")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::ValidationErr(validation_error) => {
            let message = match validation_error {
                ValidationError::RequiredField { field } if field == "id" => "ID is required".to_string(),
                other => other.to_string(),
            };
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
                .to_response(StatusCode::BAD_REQUEST)
        }
    }
}

/// 401 response with the given message
pub fn unauthorized_response(message: &str) -> HttpResponse {
    ErrorResponse::new(error_codes::UNAUTHORIZED, message).to_response(StatusCode::UNAUTHORIZED)
}

/// 404 response with the given message
pub fn not_found_response(message: &str) -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, message).to_response(StatusCode::NOT_FOUND)
}

/// Error handler for `web::Json` extraction failures, registered through
/// `JsonConfig` so malformed bodies get a JSON 400 instead of plain text
pub fn handle_json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    actix_web::error::InternalError::from_response(err, response).into()
}
