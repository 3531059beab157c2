//! Bounded, ordered slicing shared by stream and global reads.
//!
//! Both indexes are dense vectors where position `i` holds revision `i`, so a
//! read is a range walk with no lookups.

use std::sync::Arc;
use streamstore_core::{ReadDirection, ReadFrom, RecordedEvent};

/// Select up to `max_count` events starting at `from` in `direction`.
///
/// - Forward reads start at `from` and ascend. `ReadFrom::End` or a revision
///   past the end yields nothing.
/// - Backward reads start at `from` and descend. `ReadFrom::End` or a
///   revision past the end starts at the last event.
pub fn select(
    events: &[Arc<RecordedEvent>],
    direction: ReadDirection,
    from: ReadFrom,
    max_count: u64,
) -> Vec<Arc<RecordedEvent>> {
    let max = usize::try_from(max_count).unwrap_or(usize::MAX);
    if events.is_empty() || max == 0 {
        return Vec::new();
    }

    let last = events.len() - 1;
    match direction {
        ReadDirection::Forward => {
            let start = match from {
                ReadFrom::Start => 0,
                ReadFrom::End => return Vec::new(),
                ReadFrom::Revision(r) => match usize::try_from(r) {
                    Ok(r) if r <= last => r,
                    _ => return Vec::new(),
                },
            };
            events[start..].iter().take(max).cloned().collect()
        }
        ReadDirection::Backward => {
            let start = match from {
                ReadFrom::Start => 0,
                ReadFrom::End => last,
                ReadFrom::Revision(r) => usize::try_from(r).map_or(last, |r| r.min(last)),
            };
            events[..=start].iter().rev().take(max).cloned().collect()
        }
    }
}
