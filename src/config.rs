//! Server configuration from environment variables

use std::env;
use std::path::PathBuf;

use crate::types::{AlertsError, AlertsResult};

pub const DATA_FILE_VAR: &str = "ALERTS_DATA_FILE";
pub const HOST_VAR: &str = "ALERTS_HOST";
pub const PORT_VAR: &str = "ALERTS_PORT";

const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings for the alerts server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bootstrap dataset path (absolute)
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: resolve_path(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Resolve a relative path against the current directory
fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        return path;
    }
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

impl ServerConfig {
    /// Read settings from the process environment
    pub fn from_env() -> AlertsResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> AlertsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_VAR) {
            config.data_file = resolve_path(&path);
        }

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| {
                AlertsError::Config(format!("{} must be a port number, got '{}'", PORT_VAR, port))
            })?;
        }

        Ok(config)
    }

    /// `host:port` for the HTTP listener; the host may be a name or an IP
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
