//! Shared configuration and common types for the ItemVault server
//!
//! This crate provides functionality used across the server crates:
//! - Configuration types loaded from the environment
//! - The JSON error response shape returned by the API

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
