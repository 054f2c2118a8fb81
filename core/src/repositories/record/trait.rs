//! Record repository trait defining the interface for keyed record storage.

use crate::domain::entities::record::Record;

/// Repository trait for Record storage operations
///
/// Every operation is synchronous and bounded. Missing keys are ordinary
/// outcomes (`None` / `false`), never errors, so none of these methods
/// return `Result`.
///
/// Implementations must be linearizable: each call observes a consistent
/// point-in-time view and never a partially applied concurrent write.
///
/// # Example
/// ```
/// use iv_core::domain::entities::record::Record;
/// use iv_core::repositories::{InMemoryRecordStore, RecordRepository};
///
/// let store = InMemoryRecordStore::new();
/// store.put(Record::new("i1", "widget", "42"));
///
/// assert_eq!(store.get("i1").map(|r| r.name), Some("widget".to_string()));
/// assert!(store.delete("i1"));
/// assert!(!store.delete("i1"));
/// ```
pub trait RecordRepository: Send + Sync {
    /// Insert the record, or fully replace the one stored under the same `id`
    fn put(&self, record: Record);

    /// Look up a record by id
    fn get(&self, id: &str) -> Option<Record>;

    /// Snapshot of all records, in no particular order
    ///
    /// The returned vector is owned by the caller; later writes to the
    /// repository do not affect it.
    fn list(&self) -> Vec<Record>;

    /// Remove a record by id
    ///
    /// # Returns
    /// * `true` - A record was removed
    /// * `false` - No record was stored under `id`
    fn delete(&self, id: &str) -> bool;

    /// Number of stored records
    fn len(&self) -> usize;

    /// Whether the repository holds no records
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
