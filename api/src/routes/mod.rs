//! Route handlers
//!
//! - `auth` - token issuance
//! - `records` - token-gated record operations
//! - `health` - liveness probe

pub mod auth;
pub mod health;
pub mod records;

use std::sync::Arc;

use iv_core::repositories::RecordRepository;
use iv_core::services::token::TokenService;

/// Application state that holds shared services
pub struct AppState<R>
where
    R: RecordRepository,
{
    pub token_service: Arc<TokenService>,
    pub records: Arc<R>,
}

impl<R: RecordRepository> AppState<R> {
    pub fn new(token_service: Arc<TokenService>, records: Arc<R>) -> Self {
        Self {
            token_service,
            records,
        }
    }
}
