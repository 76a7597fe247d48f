//! Integration tests against a live Redis instance.
//!
//! These are `#[ignore]`d by default; run them with
//! `cargo test -p refmirror-redis -- --ignored` and a reachable server,
//! overriding the location with `REFMIRROR_REDIS_CONNECTION` if it is
//! not on localhost.

use std::collections::HashSet;

use bb8_redis::redis::AsyncCommands;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use refmirror_finder::{FindError, MirrorFinder};
use refmirror_redis::RedisMirrorFinder;
use refmirror_types::{RemoteRef, WireRef};

fn connection_url() -> String {
    std::env::var("REFMIRROR_REDIS_CONNECTION")
        .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

async fn seed(finder: &RedisMirrorFinder, key: &str, members: &[String]) {
    let mut conn = finder.pool().get().await.unwrap();
    let _: usize = conn.sadd(key, members).await.unwrap();
}

async fn cleanup(finder: &RedisMirrorFinder, key: &str) {
    let mut conn = finder.pool().get().await.unwrap();
    let _: usize = conn.del(key).await.unwrap();
}

#[tokio::test]
#[ignore = "needs a reachable redis instance"]
async fn finds_seeded_mirrors() {
    let finder = RedisMirrorFinder::connect(&connection_url()).await.unwrap();
    finder.ping().await.unwrap();

    let original = RemoteRef::new("testRepo", "master");
    let key = WireRef::from(original.clone()).to_string();
    let expected: HashSet<RemoteRef> = [
        RemoteRef::new("testRepo", "dev"),
        RemoteRef::new("otherRepo", "dev"),
    ]
    .into();

    let members: Vec<String> = expected
        .iter()
        .map(|m| WireRef::from(m.clone()).to_string())
        .collect();
    seed(&finder, &key, &members).await;

    let (tx, mut rx) = mpsc::channel(8);
    let result = finder
        .find_mirrors(CancellationToken::new(), &original, tx)
        .await;
    cleanup(&finder, &key).await;
    result.unwrap();

    let mut seen = HashSet::new();
    while let Some(mirror) = rx.recv().await {
        seen.insert(mirror);
    }
    assert_eq!(seen, expected);
}

#[tokio::test]
#[ignore = "needs a reachable redis instance"]
async fn malformed_member_fails_the_lookup() {
    let finder = RedisMirrorFinder::connect(&connection_url()).await.unwrap();
    finder.ping().await.unwrap();

    let original = RemoteRef::new("badRepo", "master");
    let key = WireRef::from(original.clone()).to_string();
    seed(&finder, &key, &["not a wire ref".to_string()]).await;

    let (tx, _rx) = mpsc::channel(8);
    let result = finder
        .find_mirrors(CancellationToken::new(), &original, tx)
        .await;
    cleanup(&finder, &key).await;

    assert!(matches!(result, Err(FindError::Malformed(_))));
}

#[tokio::test]
#[ignore = "needs a reachable redis instance"]
async fn unknown_original_yields_empty_stream() {
    let finder = RedisMirrorFinder::connect(&connection_url()).await.unwrap();

    let (tx, mut rx) = mpsc::channel(1);
    finder
        .find_mirrors(
            CancellationToken::new(),
            &RemoteRef::new("no-such-repo", "no-such-ref"),
            tx,
        )
        .await
        .unwrap();
    assert_eq!(rx.recv().await, None);
}
