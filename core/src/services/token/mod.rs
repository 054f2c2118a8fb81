//! Token service module for JWT management
//!
//! This module handles stateless token operations:
//! - HS256 token issuance for an arbitrary subject
//! - Signature, shape and expiry verification

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
