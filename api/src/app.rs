//! Application factory
//!
//! This module builds the Actix-web application from an `AppState`, wiring
//! the public routes, the token-gated record scope and shared middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};
use std::sync::Arc;

use iv_core::repositories::RecordRepository;

use crate::handlers::error::{handle_json_error, not_found_response};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{
    auth::login,
    health::health_check,
    records::{create_item, delete_item, get_item, list_items},
    AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: RecordRepository + 'static,
{
    let token_service = Arc::clone(&app_state.token_service);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(handle_json_error))
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .route("/login", web::post().to(login::<R>))
        .service(
            web::scope("/api")
                .wrap(JwtAuth::new(token_service))
                .route("/items", web::get().to(list_items::<R>))
                .route("/items", web::post().to(create_item::<R>))
                .route("/items/{id}", web::get().to(get_item::<R>))
                .route("/items/{id}", web::delete().to(delete_item::<R>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    not_found_response("The requested resource was not found")
}
