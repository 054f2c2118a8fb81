//! Domain entities representing core business objects.

pub mod record;
pub mod token;


// Re-export commonly used types
pub use record::Record;
pub use token::Claims;
