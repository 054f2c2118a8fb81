//! Token-gated record endpoints
//!
//! Every handler here sits behind `JwtAuth`, so reaching one implies a
//! verified token. The store never fails; absent keys become 404s.

use actix_web::{web, HttpResponse};
use iv_core::domain::entities::record::Record;
use iv_core::errors::{DomainError, ValidationError};
use iv_core::repositories::RecordRepository;
use validator::Validate;

use crate::dto::record::{CreateRecordRequest, MessageResponse};
use crate::handlers::error::{handle_domain_error, not_found_response, ITEM_NOT_FOUND_MESSAGE};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /api/items
pub async fn list_items<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: RecordRepository + 'static,
{
    HttpResponse::Ok().json(state.records.list())
}

/// Handler for GET /api/items/{id}
pub async fn get_item<R>(state: web::Data<AppState<R>>, path: web::Path<String>) -> HttpResponse
where
    R: RecordRepository + 'static,
{
    match state.records.get(&path.into_inner()) {
        Some(record) => HttpResponse::Ok().json(record),
        None => not_found_response(ITEM_NOT_FOUND_MESSAGE),
    }
}

/// Handler for POST /api/items
///
/// Upserts the record: an existing record with the same id is replaced
/// wholesale.
///
/// ## Errors
/// - 400 Bad Request: Missing or empty `id`
pub async fn create_item<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    request: web::Json<CreateRecordRequest>,
) -> HttpResponse
where
    R: RecordRepository + 'static,
{
    if request.validate().is_err() {
        return handle_domain_error(&DomainError::ValidationErr(ValidationError::RequiredField {
            field: "id".to_string(),
        }));
    }

    let record = Record::from(request.into_inner());
    log::debug!("{} stored record {}", auth.subject, record.id);
    state.records.put(record.clone());

    HttpResponse::Created().json(record)
}

/// Handler for DELETE /api/items/{id}
pub async fn delete_item<R>(state: web::Data<AppState<R>>, path: web::Path<String>) -> HttpResponse
where
    R: RecordRepository + 'static,
{
    if state.records.delete(&path.into_inner()) {
        HttpResponse::Ok().json(MessageResponse {
            message: "Item deleted".to_string(),
        })
    } else {
        not_found_response(ITEM_NOT_FOUND_MESSAGE)
    }
}
