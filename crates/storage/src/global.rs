//! Global log
//!
//! Single ordered sequence referencing every committed event across all
//! streams, in commit order. Holds the same `Arc<RecordedEvent>` as the
//! owning stream, so the two indexes can never diverge.
//!
//! # Locking
//!
//! Writers take [`GlobalLog::write`] while already holding their stream's
//! write lock, stamp global revisions from the explicit counter and push the
//! whole batch before releasing. The lock order is always stream then global.
//! Readers take the read lock and therefore see either none or all of a batch.

use parking_lot::{RwLock, RwLockWriteGuard};
use std::sync::Arc;
use streamstore_core::{ReadDirection, ReadFrom, RecordedEvent};

use crate::slice;

#[derive(Debug, Default)]
struct GlobalState {
    events: Vec<Arc<RecordedEvent>>,
    next_revision: u64,
}

/// Store-wide ordered log.
#[derive(Debug, Default)]
pub struct GlobalLog {
    state: RwLock<GlobalState>,
}

impl GlobalLog {
    /// Create an empty global log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity for `num_events`
    pub fn with_capacity(num_events: usize) -> Self {
        Self {
            state: RwLock::new(GlobalState {
                events: Vec::with_capacity(num_events),
                next_revision: 0,
            }),
        }
    }

    /// Next global revision to allocate
    pub fn next_revision(&self) -> u64 {
        self.state.read().next_revision
    }

    /// Number of committed events
    pub fn len(&self) -> usize {
        self.state.read().events.len()
    }

    /// Check if no event has been committed
    pub fn is_empty(&self) -> bool {
        self.state.read().events.is_empty()
    }

    /// Bounded, ordered slice of the global log
    pub fn read(
        &self,
        direction: ReadDirection,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        slice::select(&self.state.read().events, direction, from, max_count)
    }

    /// Single event by global revision
    pub fn get(&self, revision: u64) -> Option<Arc<RecordedEvent>> {
        let index = usize::try_from(revision).ok()?;
        self.state.read().events.get(index).cloned()
    }

    /// All events in commit order
    pub fn snapshot(&self) -> Vec<Arc<RecordedEvent>> {
        self.state.read().events.clone()
    }

    /// Acquire exclusive write access for stamping and appending a batch.
    pub fn write(&self) -> GlobalLogWriter<'_> {
        GlobalLogWriter {
            guard: self.state.write(),
        }
    }
}

/// Exclusive writer over the global log.
///
/// Dropping the writer publishes everything pushed through it at once.
pub struct GlobalLogWriter<'a> {
    guard: RwLockWriteGuard<'a, GlobalState>,
}

impl GlobalLogWriter<'_> {
    /// Next global revision to allocate
    pub fn next_revision(&self) -> u64 {
        self.guard.next_revision
    }

    /// Append an event whose global revision was allocated from this writer.
    pub fn push(&mut self, event: Arc<RecordedEvent>) {
        debug_assert_eq!(event.global_revision, self.guard.next_revision);
        self.guard.events.push(event);
        self.guard.next_revision += 1;
    }
}
