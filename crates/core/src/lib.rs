//! Core types for streamstore
//!
//! This crate defines the types shared by the storage, concurrency and
//! facade layers:
//! - [`EventData`] / [`RecordedEvent`]: submitted and committed events
//! - [`Precondition`] / [`ExpectedState`]: optimistic concurrency guards
//! - [`ReadDirection`] / [`ReadFrom`]: read positioning
//! - [`Error`] / [`Result`]: the single error type of the store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod event;
pub mod limits;
pub mod types;

pub use error::{Error, Result};
pub use event::{EventData, RecordedEvent};
pub use types::{
    AppendResult, ExpectedState, Precondition, ReadDirection, ReadFrom, StreamSnapshot,
};
