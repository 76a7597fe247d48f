//! The slice of the GitHub v3 push-event payload this service reads,
//! plus the response types the webhook answers with.
//!
//! Every field defaults so partial payloads — and the faux events the
//! CLI fabricates — deserialize without ceremony.

use serde::{Deserialize, Serialize};

use refmirror_types::RemoteRef;

/// A GitHub v3 `PushEvent`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub before: String,
    pub size: i64,
    pub distinct_size: i64,
    pub commits: Vec<Commit>,
    #[serde(rename = "head_commit")]
    pub head: Commit,
    pub repository: Repository,
    pub pusher: Identity,
}

/// Metadata about one commit carried by a push event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub author: Identity,
    pub url: String,
}

/// An author or pusher identity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Repository metadata carried by a push event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub ssh_url: String,
    pub git_url: String,
    pub clone_url: String,
}

/// One completed replication, echoed back to the webhook caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirroredRef {
    pub original: RemoteRef,
    pub mirror: RemoteRef,
    pub commit_id: String,
}

/// One replication that failed; the rest of the fan-out still ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedPush {
    pub mirror: RemoteRef,
    pub error: String,
}

/// Everything that happened while serving one push event.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PushOutcome {
    pub pushed: Vec<MirroredRef>,
    pub failed: Vec<FailedPush>,
}
