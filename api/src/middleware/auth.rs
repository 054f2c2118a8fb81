//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the token from the Authorization header,
//! verifies it with the core `TokenService`, and injects the verified
//! subject into the request. Requests that fail verification are answered
//! with a 401 here and never reach the wrapped service.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use iv_core::{errors::DomainError, services::token::TokenService};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::{handle_domain_error, unauthorized_response, MISSING_AUTH_HEADER_MESSAGE};

/// Authentication context injected into requests
///
/// The subject is informational; no handler uses it to restrict access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject recovered from the verified token
    pub subject: String,
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `token_service`
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    let response = unauthorized_response(MISSING_AUTH_HEADER_MESSAGE);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let subject = match token_service.verify(&token) {
                Ok(subject) => subject,
                Err(e) => {
                    let response = handle_domain_error(&DomainError::Token(e));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(AuthContext { subject });

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the token from the Authorization header
///
/// A leading `"Bearer "` is stripped when present; otherwise the raw header
/// value is used as the token. An absent or empty header yields `None`.
/// Non-ASCII bytes are kept (lossily) so such a header fails verification
/// rather than counting as missing.
pub(crate) fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?;
    if header.is_empty() {
        return None;
    }
    let value = String::from_utf8_lossy(header.as_bytes());
    Some(value.strip_prefix("Bearer ").unwrap_or(&*value).to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), Some("test_token_123".to_string()));

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, ""))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);

        let req_opaque = test::TestRequest::default()
            .insert_header((
                AUTHORIZATION,
                actix_web::http::header::HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
            ))
            .to_srv_request();
        assert!(extract_bearer_token(&req_opaque).is_some());
    }
}
