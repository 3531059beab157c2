//! Precondition validation
//!
//! Evaluates a caller's [`Precondition`] against a [`StreamSnapshot`] taken
//! under the stream's write lock. The same snapshot is later handed to the
//! revision allocator, so a passing check can never be based on a value that
//! changes before the write commits.
//!
//! ## Rules
//!
//! | Precondition | Stream state | Outcome |
//! |--------------|--------------|---------|
//! | `NoStream` | exists | `StreamAlreadyExists` |
//! | `MustExist` | absent | `StreamNotFound` |
//! | revision `r` | next revision `n != r` | `RevisionMismatch` |
//! | `Any`, no revision | anything | pass |
//!
//! State rules are evaluated before the revision rule.

use streamstore_core::{Error, ExpectedState, Precondition, Result, StreamSnapshot};

/// Validate `precondition` for `stream_id` against `snapshot`.
pub fn validate_precondition(
    stream_id: &str,
    precondition: &Precondition,
    snapshot: &StreamSnapshot,
) -> Result<()> {
    match precondition.state {
        ExpectedState::NoStream if snapshot.exists => {
            return Err(Error::StreamAlreadyExists {
                stream_id: stream_id.to_string(),
            });
        }
        ExpectedState::MustExist if !snapshot.exists => {
            return Err(Error::StreamNotFound {
                stream_id: stream_id.to_string(),
            });
        }
        _ => {}
    }

    if let Some(expected) = precondition.revision {
        if expected != snapshot.next_revision {
            return Err(Error::RevisionMismatch {
                stream_id: stream_id.to_string(),
                expected,
                actual: snapshot.next_revision,
            });
        }
    }

    Ok(())
}
