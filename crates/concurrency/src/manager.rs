//! Append manager for coordinating atomic batch commits
//!
//! Provides atomic append by orchestrating:
//! 1. Validation (input limits, then the precondition)
//! 2. Revision allocation (stream and global)
//! 3. Index application (stream, then global log)
//!
//! ## Commit Sequence
//!
//! ```text
//! 1. validate_batch()           - reject bad input before any lock
//! 2. get_or_create()            - reserve the stream's registry entry
//! 3. lock stream (write)        - per-stream critical section begins
//! 4. snapshot_state()           - capture exists/next_revision once
//! 5. validate_precondition()    - against that snapshot
//! 6. lock global log (write)    - short store-wide section begins
//! 7. allocate()                 - stream + global ranges from the snapshot
//! 8. build RecordedEvents       - all records exist before any push
//! 9. push to global log, stream - in input order
//! 10. register stream, unlock    - batch becomes visible at once
//! ```
//!
//! A failure at steps 1, 5 or 7 leaves both indexes untouched, and a rejected
//! reservation is released again so it does not linger as a phantom stream.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use streamstore_core::limits::validate_batch;
use streamstore_core::{AppendResult, EventData, Precondition, RecordedEvent, Result};
use streamstore_storage::{GlobalLog, StreamHandle, StreamRegistry};

use crate::allocator::allocate;
use crate::checker::validate_precondition;

/// Coordinates the append critical section.
///
/// # Thread Safety
///
/// Each stream's write lock serializes check, allocate and write for that
/// stream, preventing TOCTOU races between precondition validation and the
/// write. The global log lock is taken after the stream lock and only for
/// allocation and the pushes, so appends to different streams contend only
/// on that short section.
pub struct AppendManager {
    registry: Arc<StreamRegistry>,
    global: Arc<GlobalLog>,
    max_batch_size: Option<usize>,
    committed: AtomicU64,
    rejected: AtomicU64,
    events_written: AtomicU64,
}

/// Counters maintained by the append manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppendMetrics {
    /// Appends that committed (including empty registering batches)
    pub appends_committed: u64,
    /// Appends rejected by validation or precondition checks
    pub appends_rejected: u64,
    /// Events recorded across all committed appends
    pub events_written: u64,
}

impl AppendManager {
    /// Create an append manager writing into `registry` and `global`.
    pub fn new(
        registry: Arc<StreamRegistry>,
        global: Arc<GlobalLog>,
        max_batch_size: Option<usize>,
    ) -> Self {
        Self {
            registry,
            global,
            max_batch_size,
            committed: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            events_written: AtomicU64::new(0),
        }
    }

    /// Registry this manager writes into
    pub fn registry(&self) -> &Arc<StreamRegistry> {
        &self.registry
    }

    /// Global log this manager writes into
    pub fn global(&self) -> &Arc<GlobalLog> {
        &self.global
    }

    /// Configured batch limit
    pub fn max_batch_size(&self) -> Option<usize> {
        self.max_batch_size
    }

    /// Append a batch to a stream atomically.
    ///
    /// Either every event is recorded, in input order, or none is.
    ///
    /// # Returns
    /// - Ok(AppendResult) with the revision the next append should expect
    /// - Err if validation or the precondition fails; nothing was written
    pub fn append(
        &self,
        stream_id: &str,
        events: Vec<EventData>,
        precondition: Precondition,
    ) -> Result<AppendResult> {
        if let Err(e) = validate_batch(stream_id, &events, self.max_batch_size) {
            self.rejected.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(stream_id, error = %e, "append rejected by validation");
            return Err(e);
        }

        let count = events.len();
        let handle = self.registry.get_or_create(stream_id);
        let outcome = self.commit(stream_id, &handle, events, &precondition);
        drop(handle);

        match outcome {
            Ok(result) => {
                self.committed.fetch_add(1, Ordering::Relaxed);
                self.events_written
                    .fetch_add(count as u64, Ordering::Relaxed);
                tracing::debug!(
                    stream_id,
                    count,
                    next_revision = result.next_expected_stream_revision,
                    "appended events"
                );
                Ok(result)
            }
            Err(e) => {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                self.registry.release(stream_id);
                tracing::debug!(stream_id, count, error = %e, "append rejected");
                Err(e)
            }
        }
    }

    /// The critical section: check, allocate, write.
    fn commit(
        &self,
        stream_id: &str,
        handle: &StreamHandle,
        events: Vec<EventData>,
        precondition: &Precondition,
    ) -> Result<AppendResult> {
        let mut stream = handle.write();
        let snapshot = stream.snapshot_state();
        validate_precondition(stream_id, precondition, &snapshot)?;

        let mut global = self.global.write();
        let allocation = allocate(stream_id, &stream, &snapshot, &global, events.len())?;

        let records: Vec<Arc<RecordedEvent>> = events
            .into_iter()
            .zip(allocation.pairs())
            .map(|(event, (stream_revision, global_revision))| {
                Arc::new(RecordedEvent::new(
                    stream_id,
                    event,
                    stream_revision,
                    global_revision,
                    Utc::now(),
                ))
            })
            .collect();

        for record in records {
            global.push(Arc::clone(&record));
            stream.push(record);
        }
        stream.register();
        drop(global);

        Ok(AppendResult {
            next_expected_stream_revision: stream.next_revision(),
        })
    }

    /// Snapshot of the append counters
    pub fn metrics(&self) -> AppendMetrics {
        AppendMetrics {
            appends_committed: self.committed.load(Ordering::Relaxed),
            appends_rejected: self.rejected.load(Ordering::Relaxed),
            events_written: self.events_written.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for AppendManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppendManager")
            .field("max_batch_size", &self.max_batch_size)
            .field("metrics", &self.metrics())
            .finish()
    }
}
