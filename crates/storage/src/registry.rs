//! Stream registry
//!
//! Maps stream identifiers to per-stream logs.
//!
//! # Design
//!
//! - DashMap: sharded map, lookups only lock the target shard briefly
//! - Per-stream `RwLock`: each stream has its own critical section, so
//!   appends to different streams never contend on the registry
//! - Handles are cloned out of the map before their lock is taken; no stream
//!   lock is ever acquired while a shard guard is held by the append path
//!
//! # Existence
//!
//! [`StreamRegistry::get_or_create`] may insert an unregistered entry. The
//! stream only exists once an append commits under that entry's write lock.
//! An append that fails its precondition calls [`StreamRegistry::release`] to
//! drop the reservation again.

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use streamstore_core::{ReadDirection, ReadFrom, RecordedEvent};

use crate::stream::{Stream, StreamHandle};

/// Mapping from stream identifier to stream.
pub struct StreamRegistry {
    streams: DashMap<String, StreamHandle>,
}

impl StreamRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            streams: DashMap::new(),
        }
    }

    /// Create with expected number of streams
    pub fn with_capacity(num_streams: usize) -> Self {
        Self {
            streams: DashMap::with_capacity(num_streams),
        }
    }

    /// Get the stream's handle, inserting an unregistered stream if absent.
    ///
    /// Concurrent callers for the same identifier always receive the same
    /// handle, so they serialize on the same lock.
    pub fn get_or_create(&self, stream_id: &str) -> StreamHandle {
        if let Some(existing) = self.streams.get(stream_id) {
            return Arc::clone(existing.value());
        }
        let entry = self
            .streams
            .entry(stream_id.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(Stream::new())));
        Arc::clone(entry.value())
    }

    /// Get the stream's handle without creating it
    pub fn get(&self, stream_id: &str) -> Option<StreamHandle> {
        self.streams
            .get(stream_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Check if a stream exists (registered by a committed append)
    pub fn exists(&self, stream_id: &str) -> bool {
        self.get(stream_id)
            .map(|handle| handle.read().is_registered())
            .unwrap_or(false)
    }

    /// Next expected revision of a stream, `None` if it does not exist
    pub fn next_revision(&self, stream_id: &str) -> Option<u64> {
        let handle = self.get(stream_id)?;
        let snapshot = handle.read().snapshot_state();
        snapshot.exists.then_some(snapshot.next_revision)
    }

    /// All events of a stream in revision order. Empty if absent.
    pub fn snapshot(&self, stream_id: &str) -> Vec<Arc<RecordedEvent>> {
        self.get(stream_id)
            .map(|handle| handle.read().events().to_vec())
            .unwrap_or_default()
    }

    /// Bounded, ordered slice of a stream. Empty if absent.
    pub fn read(
        &self,
        stream_id: &str,
        direction: ReadDirection,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        self.get(stream_id)
            .map(|handle| handle.read().read(direction, from, max_count))
            .unwrap_or_default()
    }

    /// Single event by stream revision
    pub fn read_event(&self, stream_id: &str, revision: u64) -> Option<Arc<RecordedEvent>> {
        self.get(stream_id)
            .and_then(|handle| handle.read().get(revision))
    }

    /// Drop an unregistered reservation.
    ///
    /// The caller must have dropped its own handle first. The entry is only
    /// removed when nobody else holds the handle and no append registered it,
    /// so a concurrent appender that already obtained the handle keeps it.
    /// Returns true if an entry was removed.
    pub fn release(&self, stream_id: &str) -> bool {
        let removed = self
            .streams
            .remove_if(stream_id, |_, handle| {
                Arc::strong_count(handle) == 1 && !handle.read().is_registered()
            })
            .is_some();
        if removed {
            tracing::trace!(stream_id, "released stream reservation");
        }
        removed
    }

    /// Identifiers of all existing streams, sorted
    pub fn stream_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .streams
            .iter()
            .filter(|entry| entry.value().read().is_registered())
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    /// Number of existing streams
    pub fn len(&self) -> usize {
        self.streams
            .iter()
            .filter(|entry| entry.value().read().is_registered())
            .count()
    }

    /// Check if no stream exists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StreamRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamRegistry")
            .field("entries", &self.streams.len())
            .field("streams", &self.len())
            .finish()
    }
}
