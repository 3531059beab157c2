//! Error types for streamstore
//!
//! Every fallible store operation returns [`Result`]. Precondition failures
//! carry the stream identifier together with the expected and actual values
//! observed inside the stream's critical section, so callers can re-read the
//! stream and retry with a fresh precondition.
//!
//! The store never retries on its own behalf.

use thiserror::Error;

/// All streamstore errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// `NoStream` was expected but the stream already exists
    #[error("stream '{stream_id}' already exists")]
    StreamAlreadyExists {
        /// Stream the append targeted
        stream_id: String,
    },

    /// `MustExist` was expected but the stream has never been written
    #[error("stream '{stream_id}' not found")]
    StreamNotFound {
        /// Stream the append targeted
        stream_id: String,
    },

    /// Explicit expected revision did not match the stream at commit time
    #[error("revision mismatch on stream '{stream_id}': expected {expected}, actual {actual}")]
    RevisionMismatch {
        /// Stream the append targeted
        stream_id: String,
        /// Revision the caller expected
        expected: u64,
        /// Next revision the stream actually had
        actual: u64,
    },

    /// Stream identifier rejected before any lock was taken
    #[error("invalid stream id: {0}")]
    InvalidStreamId(String),

    /// An event in the batch was rejected before any lock was taken
    #[error("invalid event at index {index}: {reason}")]
    InvalidEvent {
        /// Position of the offending event in the submitted batch
        index: usize,
        /// Why the event was rejected
        reason: String,
    },

    /// Batch exceeds the configured maximum
    #[error("batch of {size} events for stream '{stream_id}' exceeds limit of {limit}")]
    BatchTooLarge {
        /// Stream the append targeted
        stream_id: String,
        /// Number of events submitted
        size: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for streamstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is an optimistic concurrency failure.
    ///
    /// These are the three precondition failures. The caller is expected to
    /// re-read the stream and decide whether to retry.
    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(
            self,
            Error::StreamAlreadyExists { .. }
                | Error::StreamNotFound { .. }
                | Error::RevisionMismatch { .. }
        )
    }

    /// Check if this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidStreamId(_) | Error::InvalidEvent { .. } | Error::BatchTooLarge { .. }
        )
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }

    /// Stream the failed operation targeted, when the error carries one.
    pub fn stream_id(&self) -> Option<&str> {
        match self {
            Error::StreamAlreadyExists { stream_id }
            | Error::StreamNotFound { stream_id }
            | Error::RevisionMismatch { stream_id, .. }
            | Error::BatchTooLarge { stream_id, .. } => Some(stream_id),
            _ => None,
        }
    }
}
