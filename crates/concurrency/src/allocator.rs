//! Revision allocation
//!
//! Hands out contiguous revision ranges from the two explicit counters: the
//! stream's next revision and the global log's next revision. Allocation
//! reads the counters; they only advance when the allocated events are pushed,
//! both of which happen inside the append critical section. Nothing is
//! recounted, so allocation is O(1).
//!
//! The stream range must start at the revision captured in the snapshot the
//! precondition was validated against. A different value means the stream
//! changed inside its own critical section, which is reported as
//! [`Error::Internal`] instead of being silently reconciled.

use std::ops::Range;
use streamstore_core::{Error, Result, StreamSnapshot};
use streamstore_storage::{GlobalLogWriter, Stream};

/// Revisions reserved for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Stream revisions, one per event in input order
    pub stream: Range<u64>,
    /// Global revisions, one per event in input order
    pub global: Range<u64>,
}

impl Allocation {
    /// Number of revisions allocated
    pub fn len(&self) -> usize {
        (self.stream.end - self.stream.start) as usize
    }

    /// Check if the allocation is empty
    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    /// Pairs of (stream revision, global revision) in allocation order
    pub fn pairs(&self) -> impl Iterator<Item = (u64, u64)> {
        self.stream.clone().zip(self.global.clone())
    }
}

/// Allocate `count` stream and global revisions for one batch.
pub fn allocate(
    stream_id: &str,
    stream: &Stream,
    observed: &StreamSnapshot,
    global: &GlobalLogWriter<'_>,
    count: usize,
) -> Result<Allocation> {
    if stream.next_revision() != observed.next_revision {
        tracing::error!(
            stream_id,
            observed = observed.next_revision,
            current = stream.next_revision(),
            "stream revision changed inside its critical section"
        );
        return Err(Error::Internal(format!(
            "stream '{}' moved from revision {} to {} during append",
            stream_id,
            observed.next_revision,
            stream.next_revision()
        )));
    }

    let count = u64::try_from(count)
        .map_err(|_| Error::Internal(format!("batch of {} events is too large", count)))?;

    Ok(Allocation {
        stream: range(observed.next_revision, count, "stream", stream_id)?,
        global: range(global.next_revision(), count, "global", stream_id)?,
    })
}

fn range(start: u64, count: u64, sequence: &str, stream_id: &str) -> Result<Range<u64>> {
    let end = start.checked_add(count).ok_or_else(|| {
        Error::Internal(format!(
            "{} revision overflow appending {} events to stream '{}'",
            sequence, count, stream_id
        ))
    })?;
    Ok(start..end)
}
