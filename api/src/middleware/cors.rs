//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin. Production only allows the origins listed
//! in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use iv_shared::config::Environment;
use std::env;

const DEFAULT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = Environment::from_env().unwrap_or_default();
    let max_age = parse_max_age(env::var("CORS_MAX_AGE").ok().as_deref());
    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    cors_for(environment, &allowed_origins, max_age)
}

/// Builds the CORS policy for `environment` without reading the process
/// environment
pub fn cors_for(environment: Environment, allowed_origins: &str, max_age: usize) -> Cors {
    if environment.is_production() {
        create_production_cors(parse_origins(allowed_origins), max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age)
}

fn create_production_cors(origins: Vec<&str>, max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS]
}

fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

fn parse_max_age(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.parse().ok()).unwrap_or(DEFAULT_MAX_AGE)
}
