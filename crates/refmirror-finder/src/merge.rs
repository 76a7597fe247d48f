//! Composition of several [`MirrorFinder`]s into one.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use refmirror_types::RemoteRef;

use crate::error::{FindError, Result};
use crate::traits::{deliver, MirrorFinder};

/// Presents an ordered list of [`MirrorFinder`]s as a single one.
///
/// Backends are queried strictly in list order, one at a time, and their
/// streams are concatenated: the consumer observes all of backend *i*'s
/// mirrors before any of backend *i+1*'s. The first error anywhere in
/// the chain ends the lookup — later backends are never queried, and
/// mirrors already relayed stay delivered.
///
/// The list is mutable between lookups ([`push`](Self::push) appends a
/// backend, e.g. once a remote store becomes reachable) but each lookup
/// works against a snapshot taken when it starts. The combinator holds
/// shared handles to its backends; it does not own them.
#[derive(Default)]
pub struct MergeFinder {
    finders: RwLock<Vec<Arc<dyn MirrorFinder>>>,
}

impl MergeFinder {
    /// Create a combinator with no backends. Lookups succeed and yield
    /// nothing until a backend is pushed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a backend. Takes effect for lookups started afterwards;
    /// lookups already in flight keep their snapshot.
    pub fn push(&self, finder: Arc<dyn MirrorFinder>) {
        self.finders
            .write()
            .expect("finder list lock poisoned")
            .push(finder);
    }

    fn snapshot(&self) -> Vec<Arc<dyn MirrorFinder>> {
        self.finders
            .read()
            .expect("finder list lock poisoned")
            .clone()
    }
}

#[async_trait]
impl MirrorFinder for MergeFinder {
    async fn find_mirrors(
        &self,
        cancel: CancellationToken,
        original: &RemoteRef,
        results: mpsc::Sender<RemoteRef>,
    ) -> Result<()> {
        for finder in self.snapshot() {
            // Every backend closes its own sender per the contract, and
            // the merged stream must close exactly once — so each backend
            // gets a private intermediate channel and never learns it is
            // being merged.
            let (tx, mut rx) = mpsc::channel(1);

            // The backend runs on its own task so this loop can race it
            // against the token. A backend that ignores cancellation is
            // abandoned, not awaited; its eventual result is discarded.
            let mut task = {
                let cancel = cancel.clone();
                let original = original.clone();
                tokio::spawn(async move { finder.find_mirrors(cancel, &original, tx).await })
            };

            loop {
                let next = tokio::select! {
                    biased;
                    () = cancel.cancelled() => return Err(FindError::Cancelled),
                    next = rx.recv() => next,
                };
                let Some(mirror) = next else { break };
                deliver(&cancel, &results, mirror).await?;
            }

            // The intermediate stream is exhausted; collect the backend's
            // verdict, still racing the token in case the backend closed
            // its sender early and then stalled.
            let verdict = tokio::select! {
                biased;
                () = cancel.cancelled() => Err(FindError::Cancelled),
                joined = &mut task => match joined {
                    Ok(result) => result,
                    Err(err) => Err(FindError::Backend(format!("backend task failed: {err}"))),
                },
            };
            if let Err(err) = verdict {
                debug!(error = %err, "backend lookup failed, stopping merge");
                return Err(err);
            }
        }
        Ok(())
    }
}
