//! Configuration file support
//!
//! Loads gateway configuration and stream definitions from TOML files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{GatewayConfig, LogFormat};
use crate::error::{GatewayError, Result};
use crate::registry::StreamSummary;

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Stream definitions keyed by uuid
    #[serde(default)]
    pub streams: BTreeMap<String, StreamSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address, `host:port` or `:port`
    pub http_port: String,
    /// Verbose request tracing
    pub http_debug: Option<bool>,
    /// Serve the web UI
    pub http_demo: Option<bool>,
    /// Basic auth login
    pub http_login: Option<String>,
    /// Basic auth password
    pub http_password: Option<String>,
    /// Web root directory
    pub http_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<LogFormat>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GatewayError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            server: ServerSettings {
                http_port: ":8083".to_string(),
                http_debug: Some(false),
                http_demo: Some(true),
                http_login: Some(String::new()),
                http_password: Some(String::new()),
                http_dir: Some(PathBuf::from("web")),
            },
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some(LogFormat::Pretty),
            }),
            streams: BTreeMap::new(),
        }
    }

    /// Split into the gateway snapshot and the stream definitions
    pub fn into_parts(self) -> (GatewayConfig, BTreeMap<String, StreamSummary>) {
        let defaults = GatewayConfig::default();
        let (log_level, log_format) = match self.logging {
            Some(l) => (l.level, l.format.unwrap_or_default()),
            None => (defaults.log_level, defaults.log_format),
        };

        let config = GatewayConfig {
            debug: self.server.http_debug.unwrap_or(defaults.debug),
            demo: self.server.http_demo.unwrap_or(defaults.demo),
            login: self.server.http_login.unwrap_or_default(),
            password: self.server.http_password.unwrap_or_default(),
            listen_address: self.server.http_port,
            dir: self.server.http_dir.unwrap_or(defaults.dir),
            log_level,
            log_format,
        };

        (config, self.streams)
    }
}
