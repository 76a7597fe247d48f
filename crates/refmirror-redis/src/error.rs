//! Error types for Redis connection setup.

use bb8_redis::bb8::RunError;
use bb8_redis::redis::RedisError;
use thiserror::Error;

/// Errors raised while setting up or probing the Redis connection pool.
///
/// Lookup-time failures never use this type; they surface through
/// [`FindError::Backend`](refmirror_finder::FindError::Backend) like any
/// other backend failure.
#[derive(Debug, Error)]
pub enum RedisFinderError {
    #[error("redis error: {0}")]
    Redis(#[from] RedisError),

    #[error("timed out waiting for a pooled redis connection")]
    PoolTimedOut,
}

impl From<RunError<RedisError>> for RedisFinderError {
    fn from(err: RunError<RedisError>) -> Self {
        match err {
            RunError::User(err) => Self::Redis(err),
            RunError::TimedOut => Self::PoolTimedOut,
        }
    }
}

/// Convenience type alias for connection-setup operations.
pub type Result<T> = std::result::Result<T, RedisFinderError>;
