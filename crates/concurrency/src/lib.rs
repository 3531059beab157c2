//! Concurrency layer for streamstore
//!
//! This crate implements the optimistic concurrency write path:
//! - Precondition validation against a snapshot taken under the stream lock
//! - Revision allocation from explicit stream and global counters
//! - AppendManager: check, allocate and write as one critical section

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allocator;
pub mod checker;
pub mod manager;

pub use allocator::{allocate, Allocation};
pub use checker::validate_precondition;
pub use manager::{AppendManager, AppendMetrics};
