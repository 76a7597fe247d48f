//! Error types for mirror lookups.

use thiserror::Error;

use refmirror_types::WireRefError;

/// Errors surfaced by [`MirrorFinder::find_mirrors`](crate::MirrorFinder::find_mirrors).
///
/// Every variant is terminal for the call that produced it: the stream is
/// already closed and no retry happens inside this layer. In a merged
/// lookup, the first error across the backend chain is the one surfaced.
#[derive(Debug, Error)]
pub enum FindError {
    /// The cancellation token fired before the stream was fully drained.
    #[error("mirror lookup cancelled")]
    Cancelled,

    /// The consumer dropped the receiving half of the results channel,
    /// so pending results can never be delivered.
    #[error("mirror consumer hung up before the stream was drained")]
    Disconnected,

    /// The backend (or its underlying store) could not complete the
    /// lookup.
    #[error("mirror backend error: {0}")]
    Backend(String),

    /// A stored entry did not decode as `<ref>:<repository>`.
    #[error(transparent)]
    Malformed(#[from] WireRefError),
}

impl FindError {
    /// Whether this error means "the call was aborted" rather than "the
    /// lookup failed" — callers use this to tell an abort apart from a
    /// genuinely empty result or a broken store.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Convenience type alias for lookup operations.
pub type Result<T> = std::result::Result<T, FindError>;
