//! In-memory record store guarded by a reader/writer lock.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::entities::record::Record;

use super::trait_::RecordRepository;

/// In-memory record store
///
/// A single `RwLock` guards the whole map. Reads (`get`, `list`, `len`)
/// share the lock; writes (`put`, `delete`) hold it exclusively. Each
/// operation acquires the lock exactly once, so there is no lock ordering
/// to get wrong.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, Record>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordRepository for InMemoryRecordStore {
    fn put(&self, record: Record) {
        let mut records = self.records.write();
        records.insert(record.id.clone(), record);
    }

    fn get(&self, id: &str) -> Option<Record> {
        self.records.read().get(id).cloned()
    }

    fn list(&self) -> Vec<Record> {
        self.records.read().values().cloned().collect()
    }

    fn delete(&self, id: &str) -> bool {
        self.records.write().remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }
}
