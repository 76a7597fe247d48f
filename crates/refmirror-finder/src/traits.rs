//! The [`MirrorFinder`] trait defining the lookup contract.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use refmirror_types::RemoteRef;

use crate::error::{FindError, Result};

/// A source of knowledge about which refs mirror which others.
///
/// Implementations stream every known mirror of `original` into
/// `results` and return once the stream is complete. The contract every
/// implementation must satisfy:
///
/// - **Streaming, not batch.** Mirrors are sent as they become known;
///   the consumer may act on the first before the last is produced.
/// - **Exactly-once close.** The channel closes when `results` is
///   dropped. The sender is taken by value, so every exit path — success,
///   error, cancellation — closes the stream exactly once, and nothing
///   can be sent after that.
/// - **Cancellation.** `cancel` may fire at any time, including before
///   the first result. Every send must race it (use [`deliver`]), and a
///   fired token means: stop promptly, return [`FindError::Cancelled`].
///   When a send and cancellation are both ready, cancellation wins.
/// - **Errors are terminal** for the one call that produced them. Retry
///   policy, if any, belongs to the caller.
#[async_trait]
pub trait MirrorFinder: Send + Sync {
    async fn find_mirrors(
        &self,
        cancel: CancellationToken,
        original: &RemoteRef,
        results: mpsc::Sender<RemoteRef>,
    ) -> Result<()>;
}

/// Deliver one mirror to `results`, racing the send against `cancel`.
///
/// This is the only place a backend blocks on its consumer, and one of
/// the two suspension points in the whole discovery core (the other is
/// the merge combinator awaiting a backend's verdict). The select is
/// biased toward cancellation so an already-fired token never lets
/// another item slip out.
pub async fn deliver(
    cancel: &CancellationToken,
    results: &mpsc::Sender<RemoteRef>,
    mirror: RemoteRef,
) -> Result<()> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(FindError::Cancelled),
        sent = results.send(mirror) => sent.map_err(|_| FindError::Disconnected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deliver_sends_when_capacity_is_free() {
        let cancel = CancellationToken::new();
        let (tx, mut rx) = mpsc::channel(1);

        deliver(&cancel, &tx, RemoteRef::new("r", "main"))
            .await
            .unwrap();
        assert_eq!(rx.recv().await, Some(RemoteRef::new("r", "main")));
    }

    #[tokio::test]
    async fn deliver_prefers_cancellation_over_a_ready_send() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let (tx, mut rx) = mpsc::channel(1);

        let err = deliver(&cancel, &tx, RemoteRef::new("r", "main"))
            .await
            .unwrap_err();
        assert!(err.is_cancelled());

        drop(tx);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn deliver_reports_a_hung_up_consumer() {
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let err = deliver(&cancel, &tx, RemoteRef::new("r", "main"))
            .await
            .unwrap_err();
        assert!(matches!(err, FindError::Disconnected));
    }
}
