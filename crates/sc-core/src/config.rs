use crate::error::{Result, ScError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_HOST: &str = "SUGARCUBE_HOST";
pub const ENV_PORT: &str = "SUGARCUBE_PORT";
pub const ENV_MAX_BODY_BYTES: &str = "SUGARCUBE_MAX_BODY_BYTES";
pub const ENV_STATIC_DIR: &str = "SUGARCUBE_STATIC_DIR";

/// Saves stay retrievable for one hour.
pub const DEFAULT_RETENTION_SECS: u64 = 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub retention_secs: u64,
}

impl StoreConfig {
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_secs)
    }
}

impl ServerConfig {
    /// `host:port` in the form accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
                max_body_bytes: 16 * 1024 * 1024,
                static_dir: PathBuf::from("static"),
            },
            store: StoreConfig {
                retention_secs: DEFAULT_RETENTION_SECS,
            },
        }
    }
}

impl EditorConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset or empty values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get(ENV_HOST) {
            config.server.host = host.trim().to_string();
        }
        if let Some(port) = get(ENV_PORT) {
            config.server.port = port.trim().parse().map_err(|_| {
                ScError::Config(format!("{ENV_PORT} must be a port number, got {port:?}"))
            })?;
        }
        if let Some(limit) = get(ENV_MAX_BODY_BYTES) {
            config.server.max_body_bytes = limit.trim().parse().map_err(|_| {
                ScError::Config(format!("{ENV_MAX_BODY_BYTES} must be a byte count, got {limit:?}"))
            })?;
        }
        if let Some(dir) = get(ENV_STATIC_DIR) {
            config.server.static_dir = PathBuf::from(dir);
        }

        tracing::debug!(addr = %config.server.bind_addr(), "configuration loaded");
        Ok(config)
    }
}
