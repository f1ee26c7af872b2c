//! Server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the newsdesk server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind (default `"0.0.0.0"`, all interfaces).
    pub host: String,
    /// Port to bind (default 3111).
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3111,
        }
    }
}
