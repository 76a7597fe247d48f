//! The Redis-backed [`MirrorFinder`] implementation.

use async_trait::async_trait;
use bb8_redis::bb8::Pool;
use bb8_redis::redis::{cmd, AsyncCommands};
use bb8_redis::RedisConnectionManager;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use refmirror_finder::{deliver, FindError, MirrorFinder};
use refmirror_types::{RemoteRef, WireRef};

use crate::error::Result;

/// A [`MirrorFinder`] that reads mirror sets out of Redis.
///
/// For an original ref, the store is expected to hold a set at the key
/// `<ref>:<repository>` whose members are wire-encoded mirrors in the
/// same format. Members come back in whatever order the server returns
/// them.
///
/// The member-listing request is a single round-trip that runs to
/// completion once issued; cancellation is honored before the request
/// and at every per-item delivery, not mid-request. A single member
/// that fails to decode fails the whole lookup — a bad entry in the
/// store is configuration damage, not something to skip past silently.
#[derive(Clone)]
pub struct RedisMirrorFinder {
    pool: Pool<RedisConnectionManager>,
}

impl RedisMirrorFinder {
    /// Build a connection pool for the given `redis://` URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let manager = RedisConnectionManager::new(url)?;
        let pool = Pool::builder().build(manager).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn with_pool(pool: Pool<RedisConnectionManager>) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &Pool<RedisConnectionManager> {
        &self.pool
    }

    /// Round-trip a `PING`, surfacing whatever is wrong with the
    /// connection. Used as a liveness probe at startup.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.get().await?;
        let _: String = cmd("PING").query_async(&mut *conn).await?;
        Ok(())
    }
}

#[async_trait]
impl MirrorFinder for RedisMirrorFinder {
    async fn find_mirrors(
        &self,
        cancel: CancellationToken,
        original: &RemoteRef,
        results: mpsc::Sender<RemoteRef>,
    ) -> refmirror_finder::Result<()> {
        let key = WireRef::from(original.clone()).to_string();

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| FindError::Backend(err.to_string()))?;
        let members: Vec<String> = conn
            .smembers(&key)
            .await
            .map_err(|err| FindError::Backend(err.to_string()))?;

        debug!(count = members.len(), key = %key, "redis mirror entries fetched");

        for member in members {
            let wire: WireRef = member.parse()?;
            deliver(&cancel, &results, wire.into()).await?;
        }
        Ok(())
    }
}
