//! Store configuration.

use serde::{Deserialize, Serialize};

/// Default number of streams the registry pre-allocates for.
pub const DEFAULT_STREAM_CAPACITY: usize = 64;

/// Default number of events the global log pre-allocates for.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Configuration for an [`EventStore`](crate::EventStore).
///
/// Deserializes with defaults for missing fields, so a partial document such
/// as `{"max_batch_size": 500}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Streams to pre-allocate registry capacity for
    pub stream_capacity: usize,
    /// Events to pre-allocate global log capacity for
    pub event_capacity: usize,
    /// Maximum events per append; `None` means unlimited
    pub max_batch_size: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            stream_capacity: DEFAULT_STREAM_CAPACITY,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            max_batch_size: None,
        }
    }
}
