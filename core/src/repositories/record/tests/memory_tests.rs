//! Unit tests for the in-memory record store

use crate::domain::entities::record::Record;
use crate::repositories::record::{InMemoryRecordStore, RecordRepository};

#[test]
fn test_put_then_get() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("i1", "widget", "42"));

    assert_eq!(store.get("i1"), Some(Record::new("i1", "widget", "42")));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_get_missing_returns_none() {
    let store = InMemoryRecordStore::new();
    assert_eq!(store.get("nope"), None);
    assert!(store.is_empty());
}

#[test]
fn test_put_replaces_whole_record() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("x", "a", "1"));
    store.put(Record::new("x", "b", "2"));

    assert_eq!(store.get("x"), Some(Record::new("x", "b", "2")));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_put_does_not_merge_empty_fields() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("x", "a", "1"));
    store.put(Record::new("x", "", ""));

    assert_eq!(store.get("x"), Some(Record::new("x", "", "")));
}

#[test]
fn test_delete_is_idempotent() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("i1", "widget", "42"));

    assert!(store.delete("i1"));
    assert!(!store.delete("i1"));
    assert!(!store.delete("i1"));
    assert_eq!(store.get("i1"), None);
}

#[test]
fn test_delete_absent_key_on_empty_store() {
    let store = InMemoryRecordStore::new();
    assert!(!store.delete("ghost"));
    assert!(!store.delete("ghost"));
}

#[test]
fn test_list_returns_every_record() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("a", "first", "1"));
    store.put(Record::new("b", "second", "2"));
    store.put(Record::new("c", "third", "3"));

    let mut ids: Vec<String> = store.list().into_iter().map(|r| r.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_list_is_a_snapshot() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("a", "first", "1"));

    let snapshot = store.list();
    store.put(Record::new("a", "changed", "9"));
    store.put(Record::new("b", "second", "2"));
    store.delete("a");

    assert_eq!(snapshot, vec![Record::new("a", "first", "1")]);
}

#[test]
fn test_records_are_keyed_by_their_own_id() {
    let store = InMemoryRecordStore::new();
    store.put(Record::new("k1", "one", "1"));
    store.put(Record::new("k2", "one", "1"));

    for record in store.list() {
        assert_eq!(store.get(&record.id).as_ref(), Some(&record));
    }
    assert_eq!(store.len(), 2);
}

#[test]
fn test_usable_as_trait_object() {
    let store: Box<dyn RecordRepository> = Box::new(InMemoryRecordStore::new());
    store.put(Record::new("i1", "widget", "42"));
    assert!(!store.is_empty());
}
