//! Error types for replication.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while replicating a ref to a mirror.
#[derive(Debug, Error)]
pub enum PushError {
    /// The surrounding operation was cancelled mid-replication.
    #[error("push cancelled")]
    Cancelled,

    /// The scratch directory or the `git` process could not be set up.
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// `git` exited non-zero. Failure details usually arrive on stderr,
    /// so the combined output rides along with the error.
    #[error("`{command}` exited with {status}\n{output}")]
    Command {
        command: String,
        status: ExitStatus,
        output: String,
    },
}

/// Convenience type alias for replication operations.
pub type Result<T> = std::result::Result<T, PushError>;
