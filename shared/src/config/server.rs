//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Override fields from `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS`
    ///
    /// Unparseable values are ignored and the current value is kept.
    pub fn merge_env(mut self) -> Self {
        if let Ok(host) = env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()) {
            self.port = port;
        }
        if let Some(workers) = env::var("SERVER_WORKERS").ok().and_then(|v| v.parse().ok()) {
            self.workers = workers;
        }
        self
    }
}
