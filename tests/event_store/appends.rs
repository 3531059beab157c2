//! Append Tests
//!
//! - Revision assignment per stream and globally
//! - Verbatim copy of type, data and metadata
//! - Empty batches and stream registration
//! - Input validation

use crate::common::*;

// =============================================================================
// REVISION ASSIGNMENT
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = store();
    assert!(store.is_empty());
    assert_eq!(store.total_events(), 0);
    assert!(store.stream_ids().is_empty());
}

#[test]
fn test_first_append_starts_at_zero() {
    let store = store();
    let result = store.append_to_stream("A", batch(1), Precondition::ANY).unwrap();
    assert_eq!(result.next_expected_stream_revision, 1);

    let events = store.read_stream(ReadDirection::Forward, "A", 0, 10);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].stream_revision, 0);
    assert_eq!(events[0].global_revision, 0);
    assert!(!store.is_empty());
}

#[test]
fn test_successive_appends_grow_by_batch_size() {
    let store = store();
    let mut expected = 0;
    for size in [3, 1, 4, 1, 5] {
        let result = store.append_to_stream("A", batch(size), Precondition::ANY).unwrap();
        expected += size as u64;
        assert_eq!(result.next_expected_stream_revision, expected);
        assert_eq!(store.stream_revision("A"), Some(expected));
    }

    let events = store.read_stream(ReadDirection::Forward, "A", 0, u64::MAX);
    assert_eq!(stream_revisions(&events), (0..expected).collect::<Vec<_>>());
}

#[test]
fn test_global_revisions_span_streams_in_commit_order() {
    let store = store();
    store.append_to_stream("A", batch(2), Precondition::ANY).unwrap();
    store.append_to_stream("B", batch(3), Precondition::ANY).unwrap();
    store.append_to_stream("A", batch(1), Precondition::ANY).unwrap();

    let all = store.read_all(ReadDirection::Forward, u64::MAX);
    assert_eq!(global_revisions(&all), vec![0, 1, 2, 3, 4, 5]);

    let streams: Vec<&str> = all.iter().map(|e| e.stream_id.as_str()).collect();
    assert_eq!(streams, vec!["A", "A", "B", "B", "B", "A"]);

    let a = store.read_stream(ReadDirection::Forward, "A", 0, u64::MAX);
    assert_eq!(stream_revisions(&a), vec![0, 1, 2]);
    assert_eq!(global_revisions(&a), vec![0, 1, 5]);

    let b = store.read_stream(ReadDirection::Forward, "B", 0, u64::MAX);
    assert_eq!(stream_revisions(&b), vec![0, 1, 2]);
    assert_eq!(global_revisions(&b), vec![2, 3, 4]);
}

#[test]
fn test_read_all_returns_every_appended_event() {
    let store = store();
    let mut total = 0;
    for (i, size) in [2usize, 0, 7, 1, 3].into_iter().enumerate() {
        let stream = format!("stream-{}", i % 3);
        store.append_to_stream(&stream, batch(size), Precondition::ANY).unwrap();
        total += size;
    }

    assert_eq!(store.read_all(ReadDirection::Forward, u64::MAX).len(), total);
    assert_eq!(store.total_events(), total as u64);
}

// =============================================================================
// PAYLOADS
// =============================================================================

#[test]
fn test_payloads_copied_verbatim_in_input_order() {
    let store = store();
    let events = vec![
        EventData::new("First", vec![0, 1, 2]).with_metadata(vec![9]),
        EventData::new("Second", Vec::new()),
        EventData::new("Third", vec![255; 1024]),
    ];
    store.append_to_stream("A", events.clone(), Precondition::ANY).unwrap();

    let recorded = store.read_stream(ReadDirection::Forward, "A", 0, 10);
    assert_eq!(recorded.len(), 3);
    for (submitted, stored) in events.iter().zip(recorded.iter()) {
        assert_eq!(stored.event_type, submitted.event_type);
        assert_eq!(stored.data, submitted.data);
        assert_eq!(stored.metadata, submitted.metadata);
        assert_eq!(stored.stream_id, "A");
    }
}

#[test]
fn test_json_payload_round_trip() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Deposited {
        account: String,
        amount: u64,
    }

    let store = store();
    let payload = Deposited {
        account: "acc-1".into(),
        amount: 250,
    };
    store
        .append_to_stream(
            "acc-1",
            vec![EventData::json("Deposited", &payload).unwrap()],
            ExpectedState::NoStream,
        )
        .unwrap();

    let event = store.read_event("acc-1", 0).unwrap();
    assert_eq!(event.data_as::<Deposited>().unwrap(), payload);
}

#[test]
fn test_event_ids_unique() {
    let store = store();
    store.append_to_stream("A", batch(50), Precondition::ANY).unwrap();
    store.append_to_stream("B", batch(50), Precondition::ANY).unwrap();

    let mut ids: Vec<_> = store
        .read_all(ReadDirection::Forward, u64::MAX)
        .iter()
        .map(|e| e.event_id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_created_timestamps_non_decreasing() {
    let store = store();
    store.append_to_stream("A", batch(10), Precondition::ANY).unwrap();
    let events = store.read_all(ReadDirection::Forward, u64::MAX);
    for pair in events.windows(2) {
        assert!(pair[0].created <= pair[1].created);
    }
}

// =============================================================================
// EMPTY BATCHES
// =============================================================================

#[test]
fn test_empty_batch_registers_stream() {
    let store = store();
    let result = store
        .append_with_state("A", Vec::new(), ExpectedState::NoStream)
        .unwrap();
    assert_eq!(result.next_expected_stream_revision, 0);

    assert!(store.stream_exists("A"));
    assert_eq!(store.stream_revision("A"), Some(0));
    assert_eq!(store.stream_ids(), vec!["A".to_string()]);
    // No events were recorded
    assert!(store.is_empty());
}

#[test]
fn test_empty_batch_still_checks_precondition() {
    let store = store();
    let err = store
        .append_with_state("A", Vec::new(), ExpectedState::MustExist)
        .unwrap_err();
    assert!(matches!(err, Error::StreamNotFound { .. }));
    assert!(!store.stream_exists("A"));
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_empty_stream_id_rejected() {
    let store = store();
    let err = store.append_to_stream("", batch(1), Precondition::ANY).unwrap_err();
    assert!(matches!(err, Error::InvalidStreamId(_)));
    assert!(store.is_empty());
}

#[test]
fn test_empty_event_type_rejects_whole_batch() {
    let store = store();
    let events = vec![event(0), EventData::new("", Vec::new()), event(2)];
    let err = store.append_to_stream("A", events, Precondition::ANY).unwrap_err();
    assert!(matches!(err, Error::InvalidEvent { index: 1, .. }));
    assert!(store.is_empty());
    assert!(!store.stream_exists("A"));
}

#[test]
fn test_max_batch_size_from_config() {
    init_tracing();
    let config: StoreConfig = serde_json::from_str(r#"{"max_batch_size": 2}"#).unwrap();
    let store = EventStore::with_config(config);

    assert!(store.append_to_stream("A", batch(2), Precondition::ANY).is_ok());
    let err = store.append_to_stream("A", batch(3), Precondition::ANY).unwrap_err();
    assert_eq!(
        err,
        Error::BatchTooLarge {
            stream_id: "A".into(),
            size: 3,
            limit: 2,
        }
    );
    assert_eq!(store.total_events(), 2);
}

// =============================================================================
// METRICS
// =============================================================================

#[test]
fn test_metrics_track_appends() {
    let store = store();
    store.append_to_stream("A", batch(2), Precondition::ANY).unwrap();
    store.append_to_stream("B", batch(1), Precondition::ANY).unwrap();
    let _ = store.append_with_state("A", batch(1), ExpectedState::NoStream);

    assert_eq!(
        store.metrics(),
        StoreMetrics {
            streams: 2,
            events: 3,
            appends_committed: 2,
            appends_rejected: 1,
        }
    );
}

#[test]
fn test_clones_share_state() {
    let store = store();
    let other = store.clone();
    other.append_to_stream("A", batch(1), Precondition::ANY).unwrap();
    assert_eq!(store.total_events(), 1);
    assert!(store.stream_exists("A"));
}
