//! Per-stream ordered log
//!
//! A [`Stream`] is a dense vector of recorded events plus an explicit
//! next-revision counter. The counter is bumped only by [`Stream::push`], which
//! the append engine calls while holding the stream's write lock.
//!
//! A stream can sit in the registry unregistered: the append engine reserves
//! an entry before taking its lock, and the stream only *exists* once an
//! append commits and calls [`Stream::register`].

use parking_lot::RwLock;
use std::sync::Arc;
use streamstore_core::{ReadDirection, ReadFrom, RecordedEvent, StreamSnapshot};

use crate::slice;

/// Shared handle to a stream. The write lock is the stream's critical section.
pub type StreamHandle = Arc<RwLock<Stream>>;

/// Ordered, append-only sequence of events for one stream identifier.
#[derive(Debug, Default)]
pub struct Stream {
    events: Vec<Arc<RecordedEvent>>,
    next_revision: u64,
    registered: bool,
}

impl Stream {
    /// Create an empty, unregistered stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a committed append has registered this stream
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Next stream revision to allocate
    pub fn next_revision(&self) -> u64 {
        self.next_revision
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the stream holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Capture the state used by precondition checks and allocation.
    pub fn snapshot_state(&self) -> StreamSnapshot {
        StreamSnapshot {
            exists: self.registered,
            next_revision: self.next_revision,
        }
    }

    /// Mark the stream as existing. Idempotent.
    pub fn register(&mut self) {
        self.registered = true;
    }

    /// Append a recorded event allocated for this stream.
    ///
    /// The event's stream revision must equal the current counter.
    pub fn push(&mut self, event: Arc<RecordedEvent>) {
        debug_assert_eq!(event.stream_revision, self.next_revision);
        self.events.push(event);
        self.next_revision += 1;
    }

    /// Event at `revision`, if recorded
    pub fn get(&self, revision: u64) -> Option<Arc<RecordedEvent>> {
        usize::try_from(revision)
            .ok()
            .and_then(|i| self.events.get(i))
            .cloned()
    }

    /// All events in revision order
    pub fn events(&self) -> &[Arc<RecordedEvent>] {
        &self.events
    }

    /// Bounded, ordered slice of this stream
    pub fn read(
        &self,
        direction: ReadDirection,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        slice::select(&self.events, direction, from, max_count)
    }
}
