//! Record entity stored by the record store.

use serde::{Deserialize, Serialize};

/// A named record keyed by its caller-assigned `id`
///
/// The `id` doubles as the storage key; the store never indexes a record
/// under any other key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key, assigned by the caller
    pub id: String,

    /// Display label, not unique
    pub name: String,

    /// Opaque payload
    pub value: String,
}

impl Record {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}
