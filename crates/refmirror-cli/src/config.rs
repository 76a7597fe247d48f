//! On-disk configuration: server settings plus the statically known
//! mirrors that seed the in-memory finder.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use refmirror_finder::InMemoryMirrorFinder;
use refmirror_server::AuthConfig;
use refmirror_types::RemoteRef;

/// File name looked for in the working directory and the home directory.
pub const CONFIG_FILE_NAME: &str = ".refmirror.toml";

/// Everything the `start` command reads from disk.
///
/// ```toml
/// port = 8080
/// redis_connection = "redis://127.0.0.1:6379"
///
/// [[mirror]]
/// original = { repository = "https://github.com/contoso/widgets", ref = "main" }
/// mirrors = [
///     { repository = "https://github.com/fabrikam/widgets", ref = "main" },
/// ]
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: Option<u16>,
    pub redis_connection: Option<String>,
    pub clone_depth: Option<u32>,
    pub auth: Option<AuthConfig>,
    #[serde(rename = "mirror")]
    pub mirrors: Vec<MirrorRule>,
}

/// One statically configured original and the mirrors that follow it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MirrorRule {
    pub original: RemoteRef,
    pub mirrors: Vec<RemoteRef>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config at {}", path.display()))
    }

    /// An explicit `--config` path wins; otherwise look in the working
    /// directory, then in the home directory.
    pub fn discover(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }
        let home = dirs::home_dir()?.join(CONFIG_FILE_NAME);
        home.exists().then_some(home)
    }

    /// Replace the contents of `finder` with the configured rules, in
    /// file order. This is also the reload primitive: calling it again
    /// with a re-read config swaps the whole static set atomically from
    /// a lookup's point of view.
    pub async fn populate(&self, finder: &InMemoryMirrorFinder) {
        info!(rules = self.mirrors.len(), "repopulating static mirrors");
        finder.clear_all().await;
        for rule in &self.mirrors {
            for mirror in &rule.mirrors {
                info!(original = %rule.original, mirror = %mirror, "adding static mirror");
            }
            finder
                .add_mirrors(rule.original.clone(), rule.mirrors.iter().cloned())
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    use refmirror_finder::MirrorFinder;

    use super::*;

    const SAMPLE: &str = r#"
port = 9090
redis_connection = "redis://127.0.0.1:6379"
clone_depth = 1

[auth]
username = "robot"
token = "s3cret"

[[mirror]]
original = { repository = "https://github.com/contoso/widgets", ref = "main" }
mirrors = [
    { repository = "https://github.com/fabrikam/widgets", ref = "main" },
    { repository = "https://github.com/fabrikam/widgets", ref = "staging" },
]

[[mirror]]
original = { repository = "https://github.com/contoso/gadgets", ref = "dev" }
mirrors = [
    { repository = "https://github.com/fabrikam/gadgets", ref = "dev" },
]
"#;

    #[test]
    fn parses_the_sample() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.port, Some(9090));
        assert_eq!(config.clone_depth, Some(1));
        assert_eq!(config.auth.as_ref().unwrap().username, "robot");
        assert_eq!(config.mirrors.len(), 2);
        assert_eq!(
            config.mirrors[0].original,
            RemoteRef::new("https://github.com/contoso/widgets", "main")
        );
        assert_eq!(config.mirrors[0].mirrors.len(), 2);
    }

    #[test]
    fn empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.mirrors.is_empty());
        assert!(config.port.is_none());
    }

    #[tokio::test]
    async fn populate_loads_rules_in_order() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let finder = InMemoryMirrorFinder::new();
        config.populate(&finder).await;

        let (tx, mut rx) = mpsc::channel(8);
        finder
            .find_mirrors(
                CancellationToken::new(),
                &RemoteRef::new("https://github.com/contoso/widgets", "main"),
                tx,
            )
            .await
            .unwrap();

        let mut seen = Vec::new();
        while let Some(m) = rx.recv().await {
            seen.push(m);
        }
        assert_eq!(
            seen,
            vec![
                RemoteRef::new("https://github.com/fabrikam/widgets", "main"),
                RemoteRef::new("https://github.com/fabrikam/widgets", "staging"),
            ]
        );
    }

    #[tokio::test]
    async fn populate_replaces_previous_rules() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let finder = InMemoryMirrorFinder::new();
        config.populate(&finder).await;

        let trimmed: Config = toml::from_str(
            r#"
[[mirror]]
original = { repository = "https://github.com/contoso/widgets", ref = "main" }
mirrors = [{ repository = "https://github.com/fabrikam/widgets", ref = "main" }]
"#,
        )
        .unwrap();
        trimmed.populate(&finder).await;

        let (tx, mut rx) = mpsc::channel(8);
        finder
            .find_mirrors(
                CancellationToken::new(),
                &RemoteRef::new("https://github.com/contoso/gadgets", "dev"),
                tx,
            )
            .await
            .unwrap();
        assert_eq!(rx.recv().await, None);
    }
}
