//! Precondition, position and result types shared by every layer.

use serde::{Deserialize, Serialize};

/// Caller's assumption about whether the target stream exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExpectedState {
    /// No existence check
    #[default]
    Any,
    /// The stream must not exist yet
    NoStream,
    /// The stream must already exist
    MustExist,
}

/// Write precondition validated inside the stream's critical section.
///
/// `revision`, when present, must equal the stream's next revision (its
/// event count) at commit time.
///
/// ```
/// use streamstore_core::{ExpectedState, Precondition};
///
/// let by_state: Precondition = ExpectedState::NoStream.into();
/// assert_eq!(by_state.revision, None);
///
/// let by_revision: Precondition = 3u64.into();
/// assert_eq!(by_revision.state, ExpectedState::Any);
/// assert_eq!(by_revision.revision, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Precondition {
    /// Expected existence state
    pub state: ExpectedState,
    /// Exact expected next revision
    pub revision: Option<u64>,
}

impl Precondition {
    /// No check at all; the append always proceeds.
    pub const ANY: Precondition = Precondition {
        state: ExpectedState::Any,
        revision: None,
    };

    /// Build a precondition from both parts.
    pub fn new(state: ExpectedState, revision: Option<u64>) -> Self {
        Self { state, revision }
    }

    /// Expect an exact next revision.
    pub fn revision(revision: u64) -> Self {
        Self::new(ExpectedState::Any, Some(revision))
    }

    /// Returns true if this precondition performs no check.
    pub fn is_unconditional(&self) -> bool {
        self.state == ExpectedState::Any && self.revision.is_none()
    }
}

impl From<ExpectedState> for Precondition {
    fn from(state: ExpectedState) -> Self {
        Self::new(state, None)
    }
}

impl From<u64> for Precondition {
    fn from(revision: u64) -> Self {
        Self::revision(revision)
    }
}

/// Read direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReadDirection {
    /// Increasing revision
    #[default]
    Forward,
    /// Decreasing revision
    Backward,
}

/// Starting position of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadFrom {
    /// First event (revision 0)
    Start,
    /// Most recent event
    End,
    /// Exact revision; backward reads past the end clamp to the last event
    Revision(u64),
}

impl From<u64> for ReadFrom {
    fn from(revision: u64) -> Self {
        ReadFrom::Revision(revision)
    }
}

/// Result of a successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendResult {
    /// Revision the next append to this stream should expect
    pub next_expected_stream_revision: u64,
}

/// Stream state captured under the stream lock.
///
/// The same value feeds precondition validation and revision allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSnapshot {
    /// Whether the stream has been registered by a committed append
    pub exists: bool,
    /// Next stream revision to allocate (equals the event count)
    pub next_revision: u64,
}
