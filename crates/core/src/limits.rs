//! Input validation applied before an append enters the critical section.

use crate::error::{Error, Result};
use crate::event::EventData;

/// Reject empty stream identifiers.
pub fn validate_stream_id(stream_id: &str) -> Result<()> {
    if stream_id.is_empty() {
        return Err(Error::InvalidStreamId("stream id must not be empty".into()));
    }
    Ok(())
}

/// Validate a batch before any lock is taken.
///
/// Every event needs a non-empty type tag; `max_batch_size` caps the batch
/// length when set.
pub fn validate_batch(
    stream_id: &str,
    events: &[EventData],
    max_batch_size: Option<usize>,
) -> Result<()> {
    validate_stream_id(stream_id)?;

    if let Some(limit) = max_batch_size {
        if events.len() > limit {
            return Err(Error::BatchTooLarge {
                stream_id: stream_id.to_string(),
                size: events.len(),
                limit,
            });
        }
    }

    for (index, event) in events.iter().enumerate() {
        if event.event_type.is_empty() {
            return Err(Error::InvalidEvent {
                index,
                reason: "event type must not be empty".into(),
            });
        }
    }

    Ok(())
}
