//! Read engine
//!
//! Serves bounded, ordered slices from a stream or the global log. Reads
//! never go through the append path: they take read locks on the indexes and
//! so never block appends to other streams, and never observe a partially
//! committed batch.

use std::sync::Arc;
use streamstore_core::{ReadDirection, ReadFrom, RecordedEvent};
use streamstore_storage::{GlobalLog, StreamRegistry};

/// Read-side view over the store's indexes.
#[derive(Debug, Clone)]
pub struct ReadEngine {
    registry: Arc<StreamRegistry>,
    global: Arc<GlobalLog>,
}

impl ReadEngine {
    /// Create a read engine over the given indexes
    pub fn new(registry: Arc<StreamRegistry>, global: Arc<GlobalLog>) -> Self {
        Self { registry, global }
    }

    /// Read up to `max_count` events of a stream starting at `from`.
    ///
    /// An unknown stream yields an empty vector.
    pub fn read_stream(
        &self,
        direction: ReadDirection,
        stream_id: &str,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        let events = self.registry.read(stream_id, direction, from, max_count);
        tracing::trace!(
            stream_id,
            ?direction,
            ?from,
            max_count,
            returned = events.len(),
            "read stream"
        );
        events
    }

    /// Read up to `max_count` events of the global log starting at `from`.
    pub fn read_all(
        &self,
        direction: ReadDirection,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        let events = self.global.read(direction, from, max_count);
        tracing::trace!(
            ?direction,
            ?from,
            max_count,
            returned = events.len(),
            "read all"
        );
        events
    }

    /// Single event by stream revision
    pub fn read_event(&self, stream_id: &str, revision: u64) -> Option<Arc<RecordedEvent>> {
        self.registry.read_event(stream_id, revision)
    }

    /// Single event by global revision
    pub fn read_global_event(&self, revision: u64) -> Option<Arc<RecordedEvent>> {
        self.global.get(revision)
    }
}
