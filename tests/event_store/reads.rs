//! Read Tests
//!
//! Stream and global reads: direction, start position, count cap, unknown
//! streams and single-event lookups.

use crate::common::*;

fn seeded() -> EventStore {
    let store = store();
    store.append_to_stream("A", batch(5), Precondition::ANY).unwrap();
    store.append_to_stream("B", batch(2), Precondition::ANY).unwrap();
    store.append_to_stream("A", batch(1), Precondition::ANY).unwrap();
    store
}

// =============================================================================
// STREAM READS
// =============================================================================

#[test]
fn test_read_stream_forward_from_revision() {
    let store = seeded();
    let events = store.read_stream(ReadDirection::Forward, "A", 2, 3);
    assert_eq!(stream_revisions(&events), vec![2, 3, 4]);
}

#[test]
fn test_read_stream_backward_from_revision() {
    let store = seeded();
    let events = store.read_stream(ReadDirection::Backward, "A", 3, 10);
    assert_eq!(stream_revisions(&events), vec![3, 2, 1, 0]);
}

#[test]
fn test_read_stream_backward_from_end() {
    let store = seeded();
    let events = store.read_stream_from(ReadDirection::Backward, "A", ReadFrom::End, 2);
    assert_eq!(stream_revisions(&events), vec![5, 4]);

    let clamped = store.read_stream(ReadDirection::Backward, "A", u64::MAX, 2);
    assert_eq!(stream_revisions(&clamped), vec![5, 4]);
}

#[test]
fn test_read_stream_forward_past_end_is_empty() {
    let store = seeded();
    assert!(store.read_stream(ReadDirection::Forward, "A", 6, 10).is_empty());
}

#[test]
fn test_read_stream_zero_count_is_empty() {
    let store = seeded();
    assert!(store.read_stream(ReadDirection::Forward, "A", 0, 0).is_empty());
}

#[test]
fn test_read_unknown_stream_is_empty() {
    let store = seeded();
    assert!(store
        .read_stream(ReadDirection::Forward, "never-seen", 0, 10)
        .is_empty());
    assert!(store
        .read_stream(ReadDirection::Backward, "never-seen", u64::MAX, 10)
        .is_empty());
    assert!(!store.stream_exists("never-seen"));
}

#[test]
fn test_read_stream_only_sees_own_events() {
    let store = seeded();
    let b = store.read_stream(ReadDirection::Forward, "B", 0, u64::MAX);
    assert_eq!(b.len(), 2);
    assert!(b.iter().all(|e| e.stream_id == "B"));
}

// =============================================================================
// GLOBAL READS
// =============================================================================

#[test]
fn test_read_all_forward_capped() {
    let store = seeded();
    let events = store.read_all(ReadDirection::Forward, 4);
    assert_eq!(global_revisions(&events), vec![0, 1, 2, 3]);
}

#[test]
fn test_read_all_backward_starts_at_newest() {
    let store = seeded();
    let events = store.read_all(ReadDirection::Backward, 3);
    assert_eq!(global_revisions(&events), vec![7, 6, 5]);
    assert_eq!(events[0].stream_id, "A");
    assert_eq!(events[1].stream_id, "B");
}

#[test]
fn test_read_all_from_position() {
    let store = seeded();
    let events = store.read_all_from(ReadDirection::Forward, ReadFrom::Revision(5), 10);
    assert_eq!(global_revisions(&events), vec![5, 6, 7]);

    let events = store.read_all_from(ReadDirection::Backward, ReadFrom::Revision(1), 10);
    assert_eq!(global_revisions(&events), vec![1, 0]);
}

#[test]
fn test_read_all_on_empty_store() {
    let store = store();
    assert!(store.read_all(ReadDirection::Forward, 10).is_empty());
    assert!(store.read_all(ReadDirection::Backward, 10).is_empty());
}

// =============================================================================
// SINGLE EVENTS
// =============================================================================

#[test]
fn test_read_event_by_stream_revision() {
    let store = seeded();
    let event = store.read_event("A", 5).unwrap();
    assert_eq!(event.global_revision, 7);
    assert!(store.read_event("A", 6).is_none());
    assert!(store.read_event("missing", 0).is_none());
}

#[test]
fn test_read_global_event_is_same_record() {
    let store = seeded();
    let by_stream = store.read_event("B", 1).unwrap();
    let by_global = store.read_global_event(by_stream.global_revision).unwrap();
    assert!(Arc::ptr_eq(&by_stream, &by_global));
}

#[test]
fn test_stream_ids_listed_sorted() {
    let store = seeded();
    assert_eq!(store.stream_ids(), vec!["A".to_string(), "B".to_string()]);
}
