pub mod auth;
pub mod error;
pub mod record;

pub use error::{ErrorResponse, ErrorResponseExt};
