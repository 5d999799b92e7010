//! Gateway configuration.

use serde::Deserialize;

/// Where and how to reach the remote blind controller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL commands are posted to (e.g. `http://localhost:5000/`).
    pub endpoint: String,
    /// Whole-request timeout in seconds. `None` keeps the HTTP client
    /// default, which never times out.
    pub timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/".to_string(),
            timeout_secs: None,
        }
    }
}
