//! Convenient imports for streamstore.
//!
//! ```
//! use streamstore::prelude::*;
//!
//! let store = EventStore::new();
//! assert!(store.is_empty());
//! ```

// Main entry point
pub use crate::store::{EventStore, StoreBuilder};

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{
    AppendResult, EventData, ExpectedState, Precondition, ReadDirection, ReadFrom, RecordedEvent,
};
