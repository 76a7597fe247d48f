use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "refmirror",
    about = "Keeps git repositories in sync by reacting to push events",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the webhook listener
    Start(StartArgs),
    /// Fabricate a push event and send it to a running listener
    Push(PushArgs),
}

#[derive(Args)]
pub struct StartArgs {
    /// Port to serve the webhook listener on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Redis connection URL backing dynamically configured mirrors
    #[arg(short, long)]
    pub redis_connection: Option<String>,

    /// Number of commits to fetch when cloning originals; full history when omitted
    #[arg(short = 'd', long)]
    pub clone_depth: Option<u32>,
}

#[derive(Args)]
pub struct PushArgs {
    /// Clone URL of the repository that changed
    pub repository: String,

    /// Name of the ref that changed
    #[arg(value_name = "REF")]
    pub reference: String,

    /// host:port of the refmirror instance to target
    #[arg(short = 'n', long, default_value = "localhost:8080")]
    pub hostname: String,
}
