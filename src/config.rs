// Configuration module
// The server has no external configuration surface; these are the fixed
// values the process runs with, gathered in one struct so the handler and
// server layers share a single source of truth.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen host (all interfaces)
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Root directory whose subtree is served
    pub root: PathBuf,
    /// Default documents tried when a directory is requested
    pub index_files: Vec<String>,
    /// Emit a Common Log Format line per request
    pub access_log: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            root: PathBuf::from("."),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            access_log: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

/// Shared application state, cloned into every connection task.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
