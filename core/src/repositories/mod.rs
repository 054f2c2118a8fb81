//! Repository interfaces and implementations.

pub mod record;

pub use record::{InMemoryRecordStore, RecordRepository};
