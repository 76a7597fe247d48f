//! In-memory mirror associations, populated from configuration.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};
use tokio_util::sync::CancellationToken;

use refmirror_types::RemoteRef;

use crate::error::Result;
use crate::traits::{deliver, MirrorFinder};

/// An in-memory implementation of [`MirrorFinder`].
///
/// Associations live in a `HashMap` behind an async `RwLock`. A lookup
/// holds the read half for its entire stream — deliberately, so a
/// concurrent repopulation can never reorder or truncate a mirror list
/// mid-lookup. Mutations take the write half and exclude everything
/// else; concurrent lookups share the read half freely.
///
/// Within one original, mirrors are emitted in the order they were
/// added. No entry is kept for an original with zero mirrors: an absent
/// key and an empty list both yield an empty, immediately-closed stream.
#[derive(Debug, Default)]
pub struct InMemoryMirrorFinder {
    mirrors: RwLock<HashMap<RemoteRef, Vec<RemoteRef>>>,
}

impl InMemoryMirrorFinder {
    /// Create an empty finder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `mirrors` to the list registered for `original`.
    pub async fn add_mirrors(
        &self,
        original: RemoteRef,
        mirrors: impl IntoIterator<Item = RemoteRef>,
    ) {
        let mirrors: Vec<RemoteRef> = mirrors.into_iter().collect();
        if mirrors.is_empty() {
            return;
        }
        let mut map = self.mirrors.write().await;
        map.entry(original).or_default().extend(mirrors);
    }

    /// Forget every mirror registered for `original`.
    pub async fn clear_mirrors(&self, original: &RemoteRef) {
        self.mirrors.write().await.remove(original);
    }

    /// Forget every association.
    pub async fn clear_all(&self) {
        self.mirrors.write().await.clear();
    }
}

#[async_trait]
impl MirrorFinder for InMemoryMirrorFinder {
    async fn find_mirrors(
        &self,
        cancel: CancellationToken,
        original: &RemoteRef,
        results: mpsc::Sender<RemoteRef>,
    ) -> Result<()> {
        let map = self.mirrors.read().await;
        let Some(list) = map.get(original) else {
            return Ok(());
        };
        for mirror in list {
            deliver(&cancel, &results, mirror.clone()).await?;
        }
        Ok(())
    }
}
