//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use iv_api::routes::AppState;
use iv_core::repositories::InMemoryRecordStore;
use iv_core::services::token::{TokenService, TokenServiceConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_state() -> web::Data<AppState<InMemoryRecordStore>> {
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)));
    let records = Arc::new(InMemoryRecordStore::new());
    web::Data::new(AppState::new(token_service, records))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
