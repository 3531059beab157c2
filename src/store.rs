//! Main entry point for streamstore.
//!
//! This module provides the [`EventStore`] struct, the handle through which
//! all appends and reads go.

use std::sync::Arc;
use streamstore_concurrency::AppendManager;
use streamstore_core::{
    AppendResult, EventData, ExpectedState, Precondition, ReadDirection, ReadFrom, RecordedEvent,
    Result,
};
use streamstore_storage::{GlobalLog, StreamRegistry};

use crate::config::StoreConfig;
use crate::reader::ReadEngine;

/// The event store.
///
/// Cheap to clone; clones share the same streams and global log. All state
/// lives in memory and is discarded when the last clone is dropped.
///
/// # Example
///
/// ```
/// use streamstore::prelude::*;
///
/// let store = EventStore::new();
///
/// let result = store
///     .append_with_state(
///         "order-1",
///         vec![
///             EventData::new("OrderPlaced", b"{}".to_vec()),
///             EventData::new("OrderPaid", b"{}".to_vec()),
///         ],
///         ExpectedState::NoStream,
///     )
///     .unwrap();
/// assert_eq!(result.next_expected_stream_revision, 2);
///
/// let events = store.read_stream(ReadDirection::Forward, "order-1", 0, 10);
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[1].event_type, "OrderPaid");
/// ```
#[derive(Clone)]
pub struct EventStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    config: StoreConfig,
    appender: AppendManager,
    reader: ReadEngine,
}

impl EventStore {
    /// Create a store with default settings.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store from an explicit configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let registry = Arc::new(StreamRegistry::with_capacity(config.stream_capacity));
        let global = Arc::new(GlobalLog::with_capacity(config.event_capacity));
        let appender = AppendManager::new(
            Arc::clone(&registry),
            Arc::clone(&global),
            config.max_batch_size,
        );
        let reader = ReadEngine::new(registry, global);

        tracing::debug!(
            stream_capacity = config.stream_capacity,
            event_capacity = config.event_capacity,
            max_batch_size = ?config.max_batch_size,
            "event store created"
        );

        Self {
            inner: Arc::new(StoreInner {
                config,
                appender,
                reader,
            }),
        }
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use streamstore::EventStore;
    ///
    /// let store = EventStore::builder().max_batch_size(100).build();
    /// assert_eq!(store.config().max_batch_size, Some(100));
    /// ```
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Configuration this store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    // ========================================================================
    // Appends
    // ========================================================================

    /// Append a batch to a stream under a precondition.
    ///
    /// The batch commits atomically: all events are recorded in input order,
    /// or none are. An empty batch still runs the precondition check and, on
    /// success, registers the stream.
    ///
    /// # Errors
    ///
    /// - [`Error::StreamAlreadyExists`](crate::Error::StreamAlreadyExists) for a violated `NoStream`
    /// - [`Error::StreamNotFound`](crate::Error::StreamNotFound) for a violated `MustExist`
    /// - [`Error::RevisionMismatch`](crate::Error::RevisionMismatch) for a stale expected revision
    /// - validation errors for empty identifiers, empty event types, or
    ///   batches over `max_batch_size`
    pub fn append_to_stream<I>(
        &self,
        stream_id: &str,
        events: I,
        precondition: impl Into<Precondition>,
    ) -> Result<AppendResult>
    where
        I: IntoIterator<Item = EventData>,
    {
        self.inner
            .appender
            .append(stream_id, events.into_iter().collect(), precondition.into())
    }

    /// Append expecting the stream's next revision to be `expected_revision`.
    pub fn append_with_revision<I>(
        &self,
        stream_id: &str,
        events: I,
        expected_revision: u64,
    ) -> Result<AppendResult>
    where
        I: IntoIterator<Item = EventData>,
    {
        self.append_to_stream(stream_id, events, Precondition::revision(expected_revision))
    }

    /// Append expecting the stream to be in `expected_state`.
    pub fn append_with_state<I>(
        &self,
        stream_id: &str,
        events: I,
        expected_state: ExpectedState,
    ) -> Result<AppendResult>
    where
        I: IntoIterator<Item = EventData>,
    {
        self.append_to_stream(stream_id, events, expected_state)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Read up to `max_count` events of a stream starting at `from_revision`.
    ///
    /// Backward reads starting past the end begin at the last event. An
    /// unknown stream yields an empty vector.
    pub fn read_stream(
        &self,
        direction: ReadDirection,
        stream_id: &str,
        from_revision: u64,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        self.read_stream_from(direction, stream_id, ReadFrom::Revision(from_revision), max_count)
    }

    /// Read up to `max_count` events of a stream starting at `from`.
    pub fn read_stream_from(
        &self,
        direction: ReadDirection,
        stream_id: &str,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        self.inner
            .reader
            .read_stream(direction, stream_id, from, max_count)
    }

    /// Read up to `max_count` events of the global log.
    ///
    /// Forward reads start at the oldest event, backward reads at the newest.
    pub fn read_all(&self, direction: ReadDirection, max_count: u64) -> Vec<Arc<RecordedEvent>> {
        let from = match direction {
            ReadDirection::Forward => ReadFrom::Start,
            ReadDirection::Backward => ReadFrom::End,
        };
        self.read_all_from(direction, from, max_count)
    }

    /// Read up to `max_count` events of the global log starting at `from`.
    pub fn read_all_from(
        &self,
        direction: ReadDirection,
        from: ReadFrom,
        max_count: u64,
    ) -> Vec<Arc<RecordedEvent>> {
        self.inner.reader.read_all(direction, from, max_count)
    }

    /// Single event by stream revision
    pub fn read_event(&self, stream_id: &str, revision: u64) -> Option<Arc<RecordedEvent>> {
        self.inner.reader.read_event(stream_id, revision)
    }

    /// Single event by global revision
    pub fn read_global_event(&self, revision: u64) -> Option<Arc<RecordedEvent>> {
        self.inner.reader.read_global_event(revision)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Check if no event has ever been committed.
    ///
    /// A store holding only empty registered streams is still empty.
    pub fn is_empty(&self) -> bool {
        self.inner.appender.global().is_empty()
    }

    /// Check if a stream exists
    pub fn stream_exists(&self, stream_id: &str) -> bool {
        self.inner.appender.registry().exists(stream_id)
    }

    /// Revision the next append to `stream_id` should expect; `None` if the
    /// stream does not exist.
    pub fn stream_revision(&self, stream_id: &str) -> Option<u64> {
        self.inner.appender.registry().next_revision(stream_id)
    }

    /// Identifiers of all existing streams, sorted
    pub fn stream_ids(&self) -> Vec<String> {
        self.inner.appender.registry().stream_ids()
    }

    /// Total number of committed events across all streams
    pub fn total_events(&self) -> u64 {
        self.inner.appender.global().next_revision()
    }

    /// Get store metrics.
    pub fn metrics(&self) -> StoreMetrics {
        let appends = self.inner.appender.metrics();
        StoreMetrics {
            streams: self.inner.appender.registry().len() as u64,
            events: self.total_events(),
            appends_committed: appends.appends_committed,
            appends_rejected: appends.appends_rejected,
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("config", &self.inner.config)
            .field("metrics", &self.metrics())
            .finish()
    }
}

/// Store metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetrics {
    /// Existing streams
    pub streams: u64,
    /// Committed events
    pub events: u64,
    /// Committed appends
    pub appends_committed: u64,
    /// Rejected appends
    pub appends_rejected: u64,
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use streamstore::EventStore;
///
/// let store = EventStore::builder()
///     .stream_capacity(1_000)
///     .event_capacity(100_000)
///     .max_batch_size(500)
///     .build();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    config: StoreConfig,
}

impl StoreBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Streams to pre-allocate registry capacity for.
    pub fn stream_capacity(mut self, capacity: usize) -> Self {
        self.config.stream_capacity = capacity;
        self
    }

    /// Events to pre-allocate global log capacity for.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.config.event_capacity = capacity;
        self
    }

    /// Reject appends with more than `limit` events.
    pub fn max_batch_size(mut self, limit: usize) -> Self {
        self.config.max_batch_size = Some(limit);
        self
    }

    /// Build the store.
    pub fn build(self) -> EventStore {
        EventStore::with_config(self.config)
    }
}
