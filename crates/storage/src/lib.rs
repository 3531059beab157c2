//! Storage layer for streamstore
//!
//! This crate holds the two in-memory indexes of the store:
//! - [`StreamRegistry`]: stream identifier to per-stream log, DashMap-sharded
//! - [`GlobalLog`]: every committed event in commit order
//!
//! Both index the same immutable `Arc<RecordedEvent>` records. Nothing here
//! decides *whether* a write may happen; that is the concurrency layer's job.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod global;
pub mod registry;
pub mod slice;
pub mod stream;

pub use global::{GlobalLog, GlobalLogWriter};
pub use registry::StreamRegistry;
pub use stream::{Stream, StreamHandle};
