//! The [`Pusher`] seam and its `git`-binary implementation.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use refmirror_types::{normalize_ref, RemoteRef};

use crate::error::{PushError, Result};

/// Remote name given to the mirror inside the scratch clone.
const MIRROR_REMOTE: &str = "mirror";

/// Something that can replicate one ref from an original to a mirror.
#[async_trait]
pub trait Pusher: Send + Sync {
    async fn push(
        &self,
        cancel: &CancellationToken,
        original: &RemoteRef,
        mirror: &RemoteRef,
    ) -> Result<()>;
}

/// A [`Pusher`] that shells out to the `git` binary.
///
/// Every replication works in a fresh clone under a temp directory, so
/// nothing survives between pushes and concurrent pushes cannot trample
/// each other. The sequence is the obvious one: clone the original, add
/// the mirror as a remote, push `<original-ref>:<mirror-ref>` with both
/// names normalized to their bare form.
#[derive(Clone, Copy, Debug, Default)]
pub struct GitPusher {
    /// Clone only the newest N commits; `None` clones full history.
    pub clone_depth: Option<u32>,
}

impl GitPusher {
    pub fn new(clone_depth: Option<u32>) -> Self {
        Self { clone_depth }
    }

    /// Run one `git` invocation to completion, racing the token.
    ///
    /// An abandoned child is killed on drop rather than left pushing in
    /// the background.
    async fn run_git(
        cancel: &CancellationToken,
        dir: Option<&Path>,
        args: Vec<OsString>,
    ) -> Result<()> {
        let mut command = Command::new("git");
        command.args(&args).kill_on_drop(true);
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        let rendered = {
            let mut pieces = vec!["git".to_string()];
            pieces.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
            pieces.join(" ")
        };
        debug!(command = %rendered, "running git");

        let output = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(PushError::Cancelled),
            finished = command.output() => finished?,
        };

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(PushError::Command {
            command: rendered,
            status: output.status,
            output: combined,
        })
    }
}

#[async_trait]
impl Pusher for GitPusher {
    async fn push(
        &self,
        cancel: &CancellationToken,
        original: &RemoteRef,
        mirror: &RemoteRef,
    ) -> Result<()> {
        let scratch = tempfile::tempdir()?;

        let mut clone_args: Vec<OsString> = vec!["clone".into()];
        if let Some(depth) = self.clone_depth {
            clone_args.push("--depth".into());
            clone_args.push(depth.to_string().into());
        }
        clone_args.push(original.repository.clone().into());
        clone_args.push(scratch.path().as_os_str().to_os_string());
        Self::run_git(cancel, None, clone_args).await?;

        Self::run_git(
            cancel,
            Some(scratch.path()),
            vec![
                "remote".into(),
                "add".into(),
                MIRROR_REMOTE.into(),
                mirror.repository.clone().into(),
            ],
        )
        .await?;

        let refspec = format!(
            "{}:{}",
            normalize_ref(&original.ref_name),
            normalize_ref(&mirror.ref_name)
        );
        Self::run_git(
            cancel,
            Some(scratch.path()),
            vec!["push".into(), MIRROR_REMOTE.into(), refspec.into()],
        )
        .await?;

        info!(%original, %mirror, "mirror push complete");
        Ok(())
    }
}
