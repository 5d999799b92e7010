//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `blindhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use blindhub_adapter_gateway_reqwest::GatewayConfig;
use blindhub_domain::relay::RelayPolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote device gateway settings.
    pub gateway: GatewayConfig,
    /// Relay behaviour.
    pub relay: RelayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Relay configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Whether unknown commands are forwarded (`passthrough`) or rejected
    /// (`allow_list`).
    pub policy: RelayPolicy,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `blindhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("blindhub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("BLINDHUB_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("BLINDHUB_PORT") {
            self.server.port = parse_port(&val)?;
        }
        if let Some(val) = lookup("BLINDHUB_BIND") {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("bind address {val:?} must be host:port"))
            })?;
            self.server.port = parse_port(port)?;
            self.server.host = host.to_string();
        }
        if let Some(val) = lookup("BLINDHUB_GATEWAY_URL") {
            self.gateway.endpoint = val;
        }
        if let Some(val) = lookup("BLINDHUB_GATEWAY_TIMEOUT_SECS") {
            let secs = val.parse::<u64>().map_err(|_| {
                ConfigError::Validation(format!("gateway timeout {val:?} is not a number"))
            })?;
            self.gateway.timeout_secs = Some(secs);
        }
        if let Some(val) = lookup("BLINDHUB_RELAY_POLICY") {
            self.relay.policy = val
                .parse::<RelayPolicy>()
                .map_err(|err| ConfigError::Validation(err.to_string()))?;
        }
        if let Some(val) = lookup("BLINDHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        let endpoint = self.gateway.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Validation("gateway endpoint must not be empty".to_string()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "gateway endpoint {endpoint:?} must start with http:// or https://"
            )));
        }
        if self.gateway.timeout_secs == Some(0) {
            return Err(ConfigError::Validation("gateway timeout must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>()
        .map_err(|_| ConfigError::Validation(format!("port {raw:?} is not a valid TCP port")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "blindhub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
