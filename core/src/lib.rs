//! # ItemVault Core
//!
//! Core domain layer for the ItemVault backend.
//! This crate contains the record and token entities, the stateless token
//! service, the in-memory record store, and the error types shared by them.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Record};
pub use errors::{DomainError, TokenError, ValidationError};
pub use repositories::{InMemoryRecordStore, RecordRepository};
pub use services::{TokenService, TokenServiceConfig};
