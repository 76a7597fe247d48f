use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the webhook listener.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds.
    pub bind_addr: SocketAddr,
    /// Upper bound on accepted webhook bodies, in bytes. GitHub caps
    /// push payloads well below this.
    pub max_payload_size: usize,
    /// Wall-clock budget for serving one push event end to end,
    /// lookups and pushes included.
    pub push_timeout_secs: u64,
    /// Credentials injected into mirror URLs that carry none.
    pub auth: Option<AuthConfig>,
}

impl ServerConfig {
    pub fn push_timeout(&self) -> Duration {
        Duration::from_secs(self.push_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
            max_payload_size: 5 * 1024 * 1024,
            push_timeout_secs: 10 * 60,
            auth: None,
        }
    }
}

/// Identity used when pushing to mirrors whose URLs carry no user info.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_payload_size, 5 * 1024 * 1024);
        assert_eq!(config.push_timeout(), Duration::from_secs(600));
        assert!(config.auth.is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("bind_addr = \"127.0.0.1:9000\"").unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.push_timeout_secs, 600);
    }
}
