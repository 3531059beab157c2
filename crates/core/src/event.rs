//! Event types
//!
//! [`EventData`] is what callers submit; [`RecordedEvent`] is what the store
//! keeps. A recorded event is created once inside the append critical section
//! and is never mutated afterwards, so the store hands it out behind an `Arc`
//! shared by the stream index and the global log.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event to be appended. The caller builds this; the store assigns ids,
/// timestamps and revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventData {
    /// User-defined event type tag
    pub event_type: String,
    /// Opaque payload
    pub data: Vec<u8>,
    /// Opaque metadata
    pub metadata: Vec<u8>,
}

impl EventData {
    /// Create an event with an empty metadata payload.
    pub fn new(event_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            event_type: event_type.into(),
            data,
            metadata: Vec::new(),
        }
    }

    /// Create an event from anything that serializes to JSON.
    pub fn json<T: Serialize + ?Sized>(
        event_type: impl Into<String>,
        payload: &T,
    ) -> serde_json::Result<Self> {
        Ok(Self::new(event_type, serde_json::to_vec(payload)?))
    }

    /// Attach a metadata payload.
    pub fn with_metadata(mut self, metadata: Vec<u8>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// An event as committed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Unique identifier assigned at commit
    pub event_id: Uuid,
    /// Commit timestamp
    pub created: DateTime<Utc>,
    /// Stream the event belongs to
    pub stream_id: String,
    /// Event type tag, copied from the submitted [`EventData`]
    pub event_type: String,
    /// Payload, copied verbatim
    pub data: Vec<u8>,
    /// Metadata, copied verbatim
    pub metadata: Vec<u8>,
    /// Position within the stream (0-based, gap-free)
    pub stream_revision: u64,
    /// Position within the global log (0-based, gap-free, commit order)
    pub global_revision: u64,
}

impl RecordedEvent {
    /// Build a recorded event from submitted data and allocated revisions.
    pub fn new(
        stream_id: impl Into<String>,
        event: EventData,
        stream_revision: u64,
        global_revision: u64,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            created,
            stream_id: stream_id.into(),
            event_type: event.event_type,
            data: event.data,
            metadata: event.metadata,
            stream_revision,
            global_revision,
        }
    }

    /// Deserialize the data payload as JSON.
    pub fn data_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.data)
    }

    /// Deserialize the metadata payload as JSON.
    pub fn metadata_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.metadata)
    }
}
