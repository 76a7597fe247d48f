use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use refmirror_finder::{InMemoryMirrorFinder, MergeFinder};
use refmirror_git::GitPusher;
use refmirror_redis::RedisMirrorFinder;
use refmirror_server::{MirrorServer, PushEvent, Repository, ServerConfig};

use crate::cli::{Cli, Command, PushArgs, StartArgs};
use crate::config::Config;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Start(args) => start(cli.config, args).await,
        Command::Push(args) => push(args).await,
    }
}

async fn start(config_path: Option<PathBuf>, args: StartArgs) -> anyhow::Result<()> {
    ensure_git().await?;

    let config = match Config::discover(config_path) {
        Some(path) => {
            info!(path = %path.display(), "using config file");
            Config::load(&path)?
        }
        None => {
            warn!("no config file found, starting with no static mirrors");
            Config::default()
        }
    };

    let static_mirrors = Arc::new(InMemoryMirrorFinder::new());
    config.populate(&static_mirrors).await;

    let finder = Arc::new(MergeFinder::new());
    finder.push(static_mirrors);

    // Redis joins the merge list once its pool is up, off the startup
    // path; lookups served before then only see the static mirrors.
    if let Some(url) = args.redis_connection.or_else(|| config.redis_connection.clone()) {
        let finder = Arc::clone(&finder);
        tokio::spawn(async move {
            match RedisMirrorFinder::connect(&url).await {
                Ok(redis) => {
                    match redis.ping().await {
                        Ok(()) => info!("connected to redis"),
                        Err(err) => warn!(error = %err, "redis is not answering yet"),
                    }
                    finder.push(Arc::new(redis));
                }
                Err(err) => {
                    warn!(error = %err, "unable to set up redis, dynamic mirrors disabled");
                }
            }
        });
    }

    let mut server_config = ServerConfig::default();
    if let Some(port) = args.port.or(config.port) {
        server_config.bind_addr.set_port(port);
    }
    server_config.auth = config.auth.clone();

    let pusher = Arc::new(GitPusher::new(args.clone_depth.or(config.clone_depth)));

    MirrorServer::new(server_config, finder, pusher)
        .serve()
        .await?;
    Ok(())
}

/// Replication shells out to `git`; fail at startup, not mid-push.
async fn ensure_git() -> anyhow::Result<()> {
    tokio::process::Command::new("git")
        .arg("--version")
        .output()
        .await
        .context("`git` was not found on PATH; refmirror cannot replicate without it")?;
    Ok(())
}

async fn push(args: PushArgs) -> anyhow::Result<()> {
    let event = PushEvent {
        ref_name: args.reference,
        repository: Repository {
            url: args.repository.clone(),
            clone_url: args.repository,
            ..Repository::default()
        },
        ..PushEvent::default()
    };

    let target = format!("http://{}/push/github", args.hostname);
    let response = reqwest::Client::new()
        .post(&target)
        .json(&event)
        .send()
        .await
        .with_context(|| format!("sending push event to {target}"))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    println!("{status}\n{body}");
    if !status.is_success() {
        anyhow::bail!("refmirror at {target} rejected the event");
    }
    Ok(())
}
