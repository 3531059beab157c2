//! # streamstore
//!
//! In-memory event store: append-only streams with a global commit order and
//! optimistic concurrency.
//!
//! ## Quick Start
//!
//! ```
//! use streamstore::prelude::*;
//!
//! let store = EventStore::new();
//!
//! store
//!     .append_with_state("A", vec![EventData::new("Created", vec![])], ExpectedState::NoStream)
//!     .unwrap();
//! store
//!     .append_with_revision("A", vec![EventData::new("Renamed", vec![])], 1)
//!     .unwrap();
//!
//! // Stale expectation: the stream is already at revision 2
//! let err = store
//!     .append_with_revision("A", vec![EventData::new("Renamed", vec![])], 0)
//!     .unwrap_err();
//! assert!(err.is_concurrency_conflict());
//!
//! let all = store.read_all(ReadDirection::Forward, 100);
//! assert_eq!(all.len(), 2);
//! ```
//!
//! ## Guarantees
//!
//! - Stream revisions start at 0 and increase by exactly 1 per event
//! - Global revisions start at 0 and increase by exactly 1 per event, in
//!   commit order across all streams
//! - A batch commits entirely or not at all; reads never see part of a batch
//! - Preconditions are checked inside the same per-stream critical section
//!   that allocates revisions and writes

#![warn(missing_docs)]

mod config;
mod reader;
mod store;

pub mod prelude;

pub use config::{StoreConfig, DEFAULT_EVENT_CAPACITY, DEFAULT_STREAM_CAPACITY};
pub use reader::ReadEngine;
pub use store::{EventStore, StoreBuilder, StoreMetrics};

pub use streamstore_core::{
    AppendResult, Error, EventData, ExpectedState, Precondition, ReadDirection, ReadFrom,
    RecordedEvent, Result,
};
