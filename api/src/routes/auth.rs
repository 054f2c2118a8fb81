//! Token issuance endpoint

use actix_web::{web, HttpResponse};
use iv_core::errors::DomainError;
use iv_core::repositories::RecordRepository;
use iv_shared::errors::error_codes;
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /login
///
/// Issues a token for the presented username. Any username is accepted.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "anything" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 500 Internal Server Error: Token signing failure
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: RecordRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return ErrorResponse::new(error_codes::VALIDATION_ERROR, errors.to_string())
            .to_response(actix_web::http::StatusCode::BAD_REQUEST);
    }

    match state.token_service.issue(&request.username) {
        Ok(token) => {
            log::info!("Issued token for subject: {}", request.username);
            HttpResponse::Ok().json(LoginResponse { token })
        }
        Err(e) => handle_domain_error(&DomainError::Token(e)),
    }
}
